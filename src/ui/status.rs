//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, PlacementMode};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.session.route() {
                Some(route) => ui.label(format!("Karte: {}", route)),
                None => ui.label("Karte wird angelegt..."),
            };

            ui.separator();

            ui.label(format!("Marker: {}", state.marker_count()));

            ui.separator();

            match state.store.selected() {
                Some(marker) => ui.label(format!("Auswahl: {} ({})", marker.id, marker.position)),
                None => ui.label("Auswahl: keine"),
            };

            ui.separator();

            let placement = match state.placement {
                PlacementMode::Append => "Anhängen",
                PlacementMode::InsertBefore => "Davor einfügen",
                PlacementMode::InsertAfter => "Dahinter einfügen",
            };
            ui.label(format!("Klick: {}", placement));

            ui.separator();

            ui.label(format!("Zoom: {:.2}x", state.view.camera.zoom));

            if let Some(ref path) = state.ui.current_file_path {
                ui.separator();
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                let dirty = if state.ui.has_unsaved_changes { " *" } else { "" };
                ui.label(format!("Datei: {}{}", filename, dirty));
            }

            // Statusnachricht (z.B. Backend nicht erreichbar)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
