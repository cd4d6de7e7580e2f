//! Kartenfläche: Gradnetz, Marker-Verbindungslinie und Marker-Punkte.

use crate::app::AppState;
use crate::core::{Camera2D, WORLD_UNITS_PER_DEGREE};
use glam::Vec2;

const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(28, 38, 48);
const GRATICULE_COLOR: egui::Color32 = egui::Color32::from_rgb(52, 66, 80);
const EQUATOR_COLOR: egui::Color32 = egui::Color32::from_rgb(82, 100, 118);
const PATH_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(200, 200, 200, 140);

/// Mögliche Gradnetz-Abstände in Grad, grob nach fein.
const GRATICULE_STEPS: [f64; 10] = [30.0, 10.0, 5.0, 1.0, 0.5, 0.1, 0.05, 0.01, 0.005, 0.001];
/// Mindestabstand zweier Gradnetz-Linien in Pixeln.
const GRATICULE_MIN_SPACING_PX: f64 = 60.0;

/// Konvertiert eine RGBA-Farbe aus den Optionen in eine egui-Farbe.
pub(crate) fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

/// Zeichnet die Karte in `rect`.
pub fn paint_map(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let painter = painter.with_clip_rect(rect);
    let camera = &state.view.camera;
    let size = Vec2::new(rect.width(), rect.height());
    let to_screen = |world: Vec2| {
        let local = camera.world_to_screen(world, size);
        rect.min + egui::vec2(local.x, local.y)
    };

    painter.rect_filled(rect, 0.0, BACKGROUND_COLOR);
    paint_graticule(&painter, camera, size, &to_screen);

    let options = &state.options;

    if options.show_marker_path && state.store.len() > 1 {
        let points: Vec<egui::Pos2> = state
            .store
            .iter()
            .map(|m| to_screen(m.position.to_world()))
            .collect();
        painter.add(egui::Shape::line(points, egui::Stroke::new(1.5, PATH_COLOR)));
    }

    let selected_id = state.store.selected_id();
    let outline = egui::Stroke::new(1.5, to_color32(options.marker_outline_color));

    for marker in state.store.iter() {
        let center = to_screen(marker.position.to_world());
        if !rect.expand(options.marker_radius_px * 2.0).contains(center) {
            continue;
        }

        let is_selected = selected_id == Some(marker.id);
        let (fill, radius) = if is_selected {
            (
                to_color32(options.marker_color_selected),
                options.marker_radius_px * 1.5,
            )
        } else if marker.has_text() {
            (
                to_color32(options.marker_color_annotated),
                options.marker_radius_px,
            )
        } else {
            (to_color32(options.marker_color), options.marker_radius_px)
        };

        painter.circle(center, radius, fill, outline);
    }
}

fn paint_graticule(
    painter: &egui::Painter,
    camera: &Camera2D,
    size: Vec2,
    to_screen: &impl Fn(Vec2) -> egui::Pos2,
) {
    let world_min = camera.screen_to_world(Vec2::ZERO, size);
    let world_max = camera.screen_to_world(size, size);
    let units = WORLD_UNITS_PER_DEGREE as f64;

    // Welt-y zeigt nach Süden
    let lat_top = (-world_min.y as f64 / units).clamp(-90.0, 90.0);
    let lat_bottom = (-world_max.y as f64 / units).clamp(-90.0, 90.0);
    let lng_left = (world_min.x as f64 / units).clamp(-180.0, 180.0);
    let lng_right = (world_max.x as f64 / units).clamp(-180.0, 180.0);

    let px_per_degree = units / camera.world_per_pixel(size.y) as f64;
    let step = graticule_step(px_per_degree);

    let line = |lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64, color: egui::Color32| {
        let a = Vec2::new((lng_a * units) as f32, (-lat_a * units) as f32);
        let b = Vec2::new((lng_b * units) as f32, (-lat_b * units) as f32);
        painter.line_segment([to_screen(a), to_screen(b)], egui::Stroke::new(1.0, color));
    };

    let mut lng = (lng_left / step).ceil() * step;
    while lng <= lng_right {
        let color = if lng.abs() < step * 0.5 {
            EQUATOR_COLOR
        } else {
            GRATICULE_COLOR
        };
        line(lat_bottom, lng, lat_top, lng, color);
        lng += step;
    }

    let mut lat = (lat_bottom / step).ceil() * step;
    while lat <= lat_top {
        let color = if lat.abs() < step * 0.5 {
            EQUATOR_COLOR
        } else {
            GRATICULE_COLOR
        };
        line(lat, lng_left, lat, lng_right, color);
        lat += step;
    }
}

/// Feinster Gradnetz-Abstand, dessen Linien mindestens 60 px auseinander liegen.
fn graticule_step(px_per_degree: f64) -> f64 {
    GRATICULE_STEPS
        .iter()
        .copied()
        .take_while(|step| step * px_per_degree >= GRATICULE_MIN_SPACING_PX)
        .last()
        .unwrap_or(GRATICULE_STEPS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graticule_step_gets_finer_when_zooming_in() {
        assert_eq!(graticule_step(1.0), 30.0);
        assert_eq!(graticule_step(7.0), 10.0);
        assert_eq!(graticule_step(100.0), 1.0);
        assert_eq!(graticule_step(1.0e6), 0.001);
    }

    #[test]
    fn to_color32_maps_unit_range() {
        let c = to_color32([1.0, 0.0, 0.0, 1.0]);
        assert_eq!(c, egui::Color32::from_rgb(255, 0, 0));
    }
}
