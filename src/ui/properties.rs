//! Properties-Panel (rechte Seitenleiste) für den selektierten Marker.

use crate::app::{AppIntent, AppState, PlacementMode};
use crate::core::{EditorMode, Marker};

/// Rendert das Marker-Panel und gibt erzeugte Events zurück.
pub fn render_marker_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(260.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Marker");
            ui.separator();

            match state.store.selected() {
                Some(marker) => render_selected_marker(ui, state, marker, &mut events),
                None => {
                    ui.label("Kein Marker selektiert.");
                    ui.label(
                        egui::RichText::new("Klick auf die Karte setzt einen Marker.")
                            .small()
                            .weak(),
                    );
                }
            }

            ui.separator();
            render_marker_list(ui, state, &mut events);
        });

    events
}

fn render_selected_marker(
    ui: &mut egui::Ui,
    state: &AppState,
    marker: &Marker,
    events: &mut Vec<AppIntent>,
) {
    let position = state.store.position_of_selected().unwrap_or(0);
    let count = state.store.len();

    ui.label(format!("Marker {} von {}", position + 1, count));
    ui.label(format!("Position: {}", marker.position));

    ui.separator();
    render_annotation_editor(ui, state, marker, events);

    ui.separator();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(position > 0, egui::Button::new("◀ Vorheriger"))
            .clicked()
        {
            events.push(AppIntent::SelectPreviousRequested);
        }
        if ui
            .add_enabled(position + 1 < count, egui::Button::new("Nächster ▶"))
            .clicked()
        {
            events.push(AppIntent::SelectNextRequested);
        }
    });

    if ui.button("✕ Marker löschen").clicked() {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    ui.separator();
    ui.label("Nächster Klick auf die Karte:");
    ui.horizontal(|ui| {
        placement_button(ui, state.placement, PlacementMode::Append, "Anhängen", events);
        placement_button(
            ui,
            state.placement,
            PlacementMode::InsertBefore,
            "Davor",
            events,
        );
        placement_button(
            ui,
            state.placement,
            PlacementMode::InsertAfter,
            "Dahinter",
            events,
        );
    });
}

fn render_annotation_editor(
    ui: &mut egui::Ui,
    state: &AppState,
    marker: &Marker,
    events: &mut Vec<AppIntent>,
) {
    ui.label("Notiz:");

    match state.annotation.mode() {
        EditorMode::View => {
            match marker.text_annotation.as_deref() {
                Some(text) if !text.is_empty() => ui.label(text),
                _ => ui.label(egui::RichText::new("(keine Notiz)").italics().weak()),
            };
            if ui.button("✏ Bearbeiten").clicked() {
                events.push(AppIntent::EditAnnotationRequested);
            }
        }
        EditorMode::Edit { buffer } => {
            let mut text = buffer.clone();
            let response = ui.add(
                egui::TextEdit::multiline(&mut text)
                    .desired_rows(4)
                    .hint_text("Notiz eingeben..."),
            );
            if response.changed() {
                events.push(AppIntent::AnnotationBufferChanged { text });
            }

            ui.horizontal(|ui| {
                if ui.button("💾 Speichern").clicked() {
                    events.push(AppIntent::SaveAnnotationRequested);
                }
                if ui.button("Abbrechen").clicked() {
                    events.push(AppIntent::CancelAnnotationRequested);
                }
            });
        }
    }
}

fn placement_button(
    ui: &mut egui::Ui,
    current: PlacementMode,
    mode: PlacementMode,
    label: &str,
    events: &mut Vec<AppIntent>,
) {
    if ui.selectable_label(current == mode, label).clicked() && current != mode {
        events.push(AppIntent::SetPlacementModeRequested { mode });
    }
}

fn render_marker_list(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label(format!("Alle Marker ({})", state.store.len()));

    let selected_id = state.store.selected_id();
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, marker) in state.store.iter().enumerate() {
                let label = match marker.text_annotation.as_deref() {
                    Some(text) if !text.is_empty() => {
                        format!("{}. {}", index + 1, first_line(text))
                    }
                    _ => format!("{}. {}", index + 1, marker.position),
                };

                if ui
                    .selectable_label(selected_id == Some(marker.id), label)
                    .clicked()
                {
                    events.push(AppIntent::MarkerClicked {
                        marker_id: marker.id,
                    });
                }
            }
        });
}

/// Erste Zeile einer Notiz, auf 40 Zeichen gekürzt.
fn first_line(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > 40 {
        let short: String = line.chars().take(39).collect();
        format!("{}…", short)
    } else {
        line.to_string()
    }
}
