//! Walkmap Marker-Editor.
//!
//! Desktop-Editor zum Setzen und Beschriften von Markern auf einer Karte.
//! egui/eframe-Frontend, Karten-ID vom Walkmap-Backend.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use eframe::egui;
use walkmap::{remote, ui, AppController, AppIntent, AppState, EditorOptions, MapId};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Walkmap v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Walkmap"),
            ..Default::default()
        };

        eframe::run_native(
            "Walkmap",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    /// Antwort der Start-Anfrage `POST /maps` (einmalig)
    pending_map_id: Option<Receiver<anyhow::Result<MapId>>>,
    window_title: String,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        let mut controller = AppController::new();
        if let Err(e) = controller.handle_intent(&mut state, AppIntent::ResetCameraRequested) {
            log::error!("Event handling failed: {:#}", e);
        }

        log::info!("Lege neue Karte an bei {}", state.options.api_base_url);
        let pending_map_id = Some(remote::spawn_create_map(state.options.api_base_url.clone()));

        Self {
            state,
            controller,
            input: ui::InputState::new(),
            pending_map_id,
            window_title: String::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.poll_map_id();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.sync_window_title(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    /// Übersetzt die Antwort der Start-Anfrage in einen Intent (sobald vorhanden).
    fn poll_map_id(&mut self) -> Vec<AppIntent> {
        let Some(receiver) = &self.pending_map_id else {
            return Vec::new();
        };

        let intent = match receiver.try_recv() {
            Ok(Ok(map_id)) => AppIntent::MapIdReceived { map_id },
            Ok(Err(e)) => AppIntent::MapIdFetchFailed {
                message: format!("{:#}", e),
            },
            Err(TryRecvError::Empty) => return Vec::new(),
            Err(TryRecvError::Disconnected) => AppIntent::MapIdFetchFailed {
                message: "Anfrage-Thread beendet ohne Antwort".to_string(),
            },
        };

        self.pending_map_id = None;
        vec![intent]
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_marker_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(ui::collect_keyboard_intents(
                    ui,
                    self.state.store.selected_id().is_some(),
                    self.state.annotation.is_editing(),
                ));

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.options,
                ));

                ui::paint_map(ui.painter(), rect, &self.state);

                if self.state.store.is_empty() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Klick auf die Karte setzt einen Marker",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = self.state.window_title();
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        } else if self.pending_map_id.is_some() {
            // Antwort des Backends abholen, auch ohne Benutzereingabe
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
