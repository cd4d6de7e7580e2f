//! Zentrale Konfiguration für den Walkmap-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::Camera2D;
use serde::{Deserialize, Serialize};

// ── Backend ─────────────────────────────────────────────────────────

/// Standard-Basis-URL des Walkmap-Backends.
pub const API_BASE_URL: &str = "http://localhost:8080";

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.5;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = Camera2D::ZOOM_MAX;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.5;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;
/// Startposition der Kamera (Breite, Länge).
pub const INITIAL_CENTER: [f64; 2] = [51.1657, 10.4515];
/// Start-Zoom (ca. Landesgröße).
pub const INITIAL_ZOOM: f32 = 10.0;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln: Klick innerhalb dieses Radius trifft einen Marker.
pub const SELECTION_PICK_RADIUS_PX: f32 = 10.0;

// ── Marker-Rendering ───────────────────────────────────────────────

/// Marker-Radius in Screen-Pixeln.
pub const MARKER_RADIUS_PX: f32 = 6.0;
/// Füllfarbe der Marker (RGBA: Rot).
pub const MARKER_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Farbe für Marker mit Notiz (RGBA: Orange).
pub const MARKER_COLOR_ANNOTATED: [f32; 4] = [1.0, 0.55, 0.1, 1.0];
/// Farbe des selektierten Markers (RGBA: Magenta).
pub const MARKER_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Outline-Farbe der Marker (RGBA: Dunkelrot).
pub const MARKER_OUTLINE_COLOR: [f32; 4] = [0.4, 0.0, 0.0, 1.0];
/// Verbindungslinien zwischen aufeinanderfolgenden Markern zeichnen.
pub const SHOW_MARKER_PATH: bool = true;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `walkmap.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Backend ─────────────────────────────────────────────────
    /// Basis-URL für `POST /maps`
    pub api_base_url: String,

    // ── Marker ──────────────────────────────────────────────────
    /// Marker-Radius in Screen-Pixeln
    pub marker_radius_px: f32,
    /// Füllfarbe der Marker
    pub marker_color: [f32; 4],
    /// Füllfarbe der Marker mit Notiz
    pub marker_color_annotated: [f32; 4],
    /// Füllfarbe des selektierten Markers
    pub marker_color_selected: [f32; 4],
    /// Outline-Farbe der Marker
    pub marker_outline_color: [f32; 4],
    /// Linie zwischen aufeinanderfolgenden Markern
    #[serde(default = "default_show_marker_path")]
    pub show_marker_path: bool,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Klick-Selektion in Screen-Pixeln
    pub selection_pick_radius_px: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
    /// Startposition (Breite, Länge)
    #[serde(default = "default_initial_center")]
    pub initial_center: [f64; 2],
    /// Start-Zoom
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),

            marker_radius_px: MARKER_RADIUS_PX,
            marker_color: MARKER_COLOR,
            marker_color_annotated: MARKER_COLOR_ANNOTATED,
            marker_color_selected: MARKER_COLOR_SELECTED,
            marker_outline_color: MARKER_OUTLINE_COLOR,
            show_marker_path: SHOW_MARKER_PATH,

            selection_pick_radius_px: SELECTION_PICK_RADIUS_PX,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            initial_center: INITIAL_CENTER,
            initial_zoom: INITIAL_ZOOM,
        }
    }
}

/// Serde-Default für `show_marker_path` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_show_marker_path() -> bool {
    SHOW_MARKER_PATH
}

fn default_initial_center() -> [f64; 2] {
    INITIAL_CENTER
}

fn default_initial_zoom() -> f32 {
    INITIAL_ZOOM
}

fn positive_or(value: f32, default: f32, name: &str) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("Ungültiger Wert für {}: {}, verwende {}", name, value, default);
        default
    }
}

/// Zoom-Schritte müssen größer als 1 sein, sonst kehren sich Hinein/Heraus um.
fn step_or(value: f32, default: f32, name: &str) -> f32 {
    if value.is_finite() && value > 1.0 {
        value
    } else {
        log::warn!(
            "Ungültiger Zoom-Schritt für {}: {}, verwende {}",
            name,
            value,
            default
        );
        default
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt ungültige Kamera- und Marker-Werte durch gültige.
    ///
    /// Nicht endliche oder nicht positive Werte fallen auf die Standardwerte
    /// zurück, vertauschte Zoom-Grenzen werden getauscht und die Obergrenze
    /// auf [`Camera2D::ZOOM_MAX`] begrenzt. Danach gilt
    /// `0 < camera_zoom_min <= camera_zoom_max`.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        self.camera_zoom_min = positive_or(
            self.camera_zoom_min,
            defaults.camera_zoom_min,
            "camera_zoom_min",
        );
        self.camera_zoom_max = positive_or(
            self.camera_zoom_max,
            defaults.camera_zoom_max,
            "camera_zoom_max",
        );
        if self.camera_zoom_min > self.camera_zoom_max {
            log::warn!(
                "Zoom-Grenzen vertauscht ({} > {}), werden getauscht",
                self.camera_zoom_min,
                self.camera_zoom_max
            );
            std::mem::swap(&mut self.camera_zoom_min, &mut self.camera_zoom_max);
        }
        if self.camera_zoom_max > Camera2D::ZOOM_MAX {
            log::warn!(
                "camera_zoom_max {} über Präzisionsgrenze, begrenzt auf {}",
                self.camera_zoom_max,
                Camera2D::ZOOM_MAX
            );
            self.camera_zoom_max = Camera2D::ZOOM_MAX;
            self.camera_zoom_min = self.camera_zoom_min.min(self.camera_zoom_max);
        }

        self.camera_zoom_step = step_or(
            self.camera_zoom_step,
            defaults.camera_zoom_step,
            "camera_zoom_step",
        );
        self.camera_scroll_zoom_step = step_or(
            self.camera_scroll_zoom_step,
            defaults.camera_scroll_zoom_step,
            "camera_scroll_zoom_step",
        );
        self.initial_zoom = positive_or(self.initial_zoom, defaults.initial_zoom, "initial_zoom");
        self.marker_radius_px = positive_or(
            self.marker_radius_px,
            defaults.marker_radius_px,
            "marker_radius_px",
        );
        self.selection_pick_radius_px = positive_or(
            self.selection_pick_radius_px,
            defaults.selection_pick_radius_px,
            "selection_pick_radius_px",
        );
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("walkmap"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("walkmap.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_toml_roundtrip() {
        let mut options = EditorOptions::default();
        options.api_base_url = "https://walkmap.example".to_string();
        options.marker_radius_px = 9.0;

        let content = toml::to_string_pretty(&options).unwrap();
        let parsed: EditorOptions = toml::from_str(&content).unwrap();

        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let mut content = toml::to_string_pretty(&EditorOptions::default()).unwrap();
        content = content
            .lines()
            .filter(|l| !l.starts_with("show_marker_path") && !l.starts_with("initial_zoom"))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed: EditorOptions = toml::from_str(&content).unwrap();
        assert_eq!(parsed.show_marker_path, SHOW_MARKER_PATH);
        assert_eq!(parsed.initial_zoom, INITIAL_ZOOM);
    }

    #[test]
    fn test_sanitized_swaps_inverted_zoom_limits() {
        let mut options = EditorOptions::default();
        options.camera_zoom_min = 50.0;
        options.camera_zoom_max = 5.0;

        let options = options.sanitized();
        assert_eq!(options.camera_zoom_min, 5.0);
        assert_eq!(options.camera_zoom_max, 50.0);
    }

    #[test]
    fn test_sanitized_replaces_invalid_values_with_defaults() {
        let defaults = EditorOptions::default();
        let mut options = defaults.clone();
        options.camera_zoom_min = f32::NAN;
        options.camera_zoom_max = 1.0e9;
        options.camera_zoom_step = 0.0;
        options.camera_scroll_zoom_step = -1.1;
        options.initial_zoom = f32::INFINITY;
        options.marker_radius_px = -3.0;

        let options = options.sanitized();
        assert_eq!(options.camera_zoom_min, defaults.camera_zoom_min);
        assert_eq!(options.camera_zoom_max, Camera2D::ZOOM_MAX);
        assert_eq!(options.camera_zoom_step, defaults.camera_zoom_step);
        assert_eq!(options.camera_scroll_zoom_step, defaults.camera_scroll_zoom_step);
        assert_eq!(options.initial_zoom, defaults.initial_zoom);
        assert_eq!(options.marker_radius_px, defaults.marker_radius_px);
    }

    #[test]
    fn test_sanitized_keeps_valid_defaults() {
        assert_eq!(EditorOptions::default().sanitized(), EditorOptions::default());
    }

    #[test]
    fn test_load_from_file_with_inverted_zoom_limits() {
        let mut options = EditorOptions::default();
        options.camera_zoom_min = 50.0;
        options.camera_zoom_max = 5.0;
        let path = std::env::temp_dir().join("walkmap_options_inverted_zoom.toml");
        std::fs::write(&path, toml::to_string_pretty(&options).unwrap()).unwrap();

        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert!(loaded.camera_zoom_min <= loaded.camera_zoom_max);
        // Darf nicht panicken
        let _ = loaded.initial_zoom.clamp(loaded.camera_zoom_min, loaded.camera_zoom_max);
    }

    #[test]
    fn test_load_from_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("walkmap_options_does_not_exist.toml");
        let options = EditorOptions::load_from_file(&path);
        assert_eq!(options, EditorOptions::default());
    }
}
