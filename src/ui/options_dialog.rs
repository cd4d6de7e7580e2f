//! Optionen-Dialog für Backend, Marker-Darstellung und Kamera.

use super::map_view::to_color32;
use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Backend ─────────────────────────────────────
                    ui.collapsing("Backend", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Basis-URL:");
                            changed |= ui.text_edit_singleline(&mut opts.api_base_url).changed();
                        });
                        ui.label(
                            egui::RichText::new("Wirkt beim nächsten Start.")
                                .small()
                                .weak(),
                        );
                    });

                    // ── Marker ──────────────────────────────────────
                    ui.collapsing("Marker", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.marker_radius_px)
                                        .range(2.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Farbe:", &mut opts.marker_color);
                        changed |= color_edit(ui, "Mit Notiz:", &mut opts.marker_color_annotated);
                        changed |= color_edit(ui, "Selektiert:", &mut opts.marker_color_selected);
                        changed |= color_edit(ui, "Umriss-Farbe:", &mut opts.marker_outline_color);
                        changed |= ui
                            .checkbox(&mut opts.show_marker_path, "Reihenfolge als Linie")
                            .changed();
                    });

                    // ── Selektion ───────────────────────────────────
                    ui.collapsing("Selektion", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Pick-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.selection_pick_radius_px)
                                        .range(4.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Menü):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_step)
                                        .range(1.01..=3.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Scroll):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_scroll_zoom_step)
                                        .range(1.01..=2.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Start (Breite, Länge):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.initial_center[0])
                                        .range(-90.0..=90.0)
                                        .speed(0.01),
                                )
                                .changed();
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.initial_center[1])
                                        .range(-180.0..=180.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        let zoom_range = opts.camera_zoom_min..=opts.camera_zoom_max;
                        ui.horizontal(|ui| {
                            ui.label("Start-Zoom:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.initial_zoom)
                                        .range(zoom_range)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = c.to_normalized_gamma_f32();
            changed = true;
        }
    });
    changed
}
