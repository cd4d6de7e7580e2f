//! 2D-Kamera für Pan und Zoom über der Karte.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = ganze Erdkugel in der Höhe sichtbar)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0 (90° Breite).
    pub const BASE_WORLD_EXTENT: f32 = 9000.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.5;
    /// Maximaler Zoom-Faktor.
    ///
    /// Welt-Koordinaten sind `f32`; bei 180° Länge (18 000 Einheiten) beträgt
    /// ein `f32`-Schritt ca. 0.002 Einheiten. Bis zu diesem Zoom entspricht ein
    /// Pixel noch mehreren Schritten (ca. 0.011 Einheiten bei 800 px Höhe).
    pub const ZOOM_MAX: f32 = 2_000.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb der Standardgrenzen
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level innerhalb konfigurierter Grenzen
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Konvertiert Screen-Koordinaten (relativ zur Viewport-Ecke) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let half = screen_size * 0.5;
        (screen_pos - half) * self.world_per_pixel(screen_size.y) + self.position
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (relativ zur Viewport-Ecke).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let half = screen_size * 0.5;
        (world_pos - self.position) / self.world_per_pixel(screen_size.y) + half
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }

    /// Berechnet den Pick-Radius in Welt-Einheiten für die Marker-Auswahl.
    pub fn pick_radius_world(&self, viewport_height: f32, pick_radius_px: f32) -> f32 {
        pick_radius_px * self.world_per_pixel(viewport_height)
    }

    /// Wählt Position und Zoom so, dass die Box mit etwas Rand sichtbar ist.
    pub fn fit_bounds(&mut self, min: Vec2, max: Vec2, viewport_size: Vec2) {
        self.position = (min + max) * 0.5;

        let extent = (max - min).max(Vec2::splat(1.0)) * 0.5 * 1.2;
        let aspect = if viewport_size.y > 0.0 {
            viewport_size.x / viewport_size.y
        } else {
            1.0
        };
        let needed = extent.y.max(extent.x / aspect.max(0.01));
        self.zoom = (Self::BASE_WORLD_EXTENT / needed).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
