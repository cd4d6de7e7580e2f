//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::LatLng;
use glam::Vec2;

/// Setzt die Kamera auf Startposition und Start-Zoom aus den Optionen zurück.
pub fn reset_camera(state: &mut AppState) {
    let [lat, lng] = state.options.initial_center;
    let center = match LatLng::new(lat, lng) {
        Ok(center) => center.to_world(),
        Err(e) => {
            log::warn!("Ungültige Startposition in den Optionen: {}", e);
            Vec2::ZERO
        }
    };

    state.view.camera.look_at(center);
    state.view.camera.zoom = state
        .options
        .initial_zoom
        .clamp(state.options.camera_zoom_min, state.options.camera_zoom_max);
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<Vec2>) {
    let old_zoom = state.view.camera.zoom;
    state.view.camera.zoom_by_clamped(
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );

    if let Some(focus) = focus_world {
        let scale = old_zoom / state.view.camera.zoom;
        state.view.camera.position = focus + (state.view.camera.position - focus) * scale;
    }
}

/// Zentriert die Kamera auf alle Marker.
///
/// Keine Operation, wenn keine Marker vorhanden sind.
pub fn fit_to_markers(state: &mut AppState) {
    let Some((min, max)) = state.store.world_bounds() else {
        log::debug!("Keine Marker vorhanden, Kamera bleibt unverändert");
        return;
    };

    let viewport = Vec2::from(state.view.viewport_size);
    state.view.camera.fit_bounds(min, max, viewport);
    state.view.camera.zoom = state
        .view
        .camera
        .zoom
        .clamp(state.options.camera_zoom_min, state.options.camera_zoom_max);

    log::info!(
        "Kamera auf Marker zentriert: ({:.1}, {:.1}) bis ({:.1}, {:.1}), Zoom {:.2}",
        min.x,
        min.y,
        max.x,
        max.y,
        state.view.camera.zoom
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reset_camera_uses_initial_center_and_zoom() {
        let mut state = AppState::new();
        state.options.initial_center = [10.0, 20.0];
        state.options.initial_zoom = 4.0;
        state.view.camera.look_at(Vec2::new(100.0, 200.0));

        reset_camera(&mut state);

        assert_relative_eq!(state.view.camera.position.x, 2000.0);
        assert_relative_eq!(state.view.camera.position.y, -1000.0);
        assert_relative_eq!(state.view.camera.zoom, 4.0);
    }

    #[test]
    fn reset_camera_after_sanitizing_inverted_limits() {
        let mut state = AppState::new();
        let mut options = state.options.clone();
        options.camera_zoom_min = 50.0;
        options.camera_zoom_max = 5.0;
        options.initial_zoom = 100.0;
        state.options = options.sanitized();

        reset_camera(&mut state);
        zoom_in(&mut state);

        assert_relative_eq!(state.view.camera.zoom, 50.0);
    }

    #[test]
    fn zoom_in_and_out_respect_option_limits() {
        let mut state = AppState::new();
        state.options.camera_zoom_max = 2.0;
        state.view.camera.zoom = 1.0;

        zoom_in(&mut state);
        zoom_in(&mut state);
        assert_relative_eq!(state.view.camera.zoom, 2.0);

        zoom_out(&mut state);
        assert_relative_eq!(state.view.camera.zoom, 2.0 / 1.5);
    }

    #[test]
    fn zoom_towards_keeps_focus_point_stable() {
        let mut state = AppState::new();
        state.view.camera.position = Vec2::new(0.0, 0.0);
        state.view.camera.zoom = 1.0;
        let focus = Vec2::new(100.0, 0.0);

        zoom_towards(&mut state, 2.0, Some(focus));

        // Abstand zur Fokusposition halbiert sich
        assert_relative_eq!(state.view.camera.position.x, 50.0);
        assert_relative_eq!(state.view.camera.zoom, 2.0);
    }

    #[test]
    fn fit_to_markers_without_markers_is_noop() {
        let mut state = AppState::new();
        state.view.camera.look_at(Vec2::new(5.0, 5.0));

        fit_to_markers(&mut state);

        assert_eq!(state.view.camera.position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn fit_to_markers_centers_on_bounds() {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];
        state.store.add(LatLng::new(0.0, 0.0).unwrap());
        state.store.add(LatLng::new(2.0, 4.0).unwrap());

        fit_to_markers(&mut state);

        assert_relative_eq!(state.view.camera.position.x, 200.0);
        assert_relative_eq!(state.view.camera.position.y, -100.0);
    }
}
