//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::FitCameraToMarkers => handlers::view::fit_to_markers(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Marker ===
            AppCommand::PlaceMarker {
                position,
                placement,
            } => handlers::markers::place(state, position, placement),
            AppCommand::SelectMarker { marker_id } => handlers::markers::select(state, marker_id),
            AppCommand::SelectPreviousMarker => handlers::markers::select_previous(state),
            AppCommand::SelectNextMarker => handlers::markers::select_next(state),
            AppCommand::DeleteSelectedMarker => handlers::markers::delete_selected(state),
            AppCommand::ClearSelection => handlers::markers::clear_selection(state),
            AppCommand::SetPlacementMode { mode } => {
                handlers::markers::set_placement_mode(state, mode)
            }

            // === Notiz-Editor ===
            AppCommand::BeginAnnotationEdit => handlers::annotation::begin_edit(state)?,
            AppCommand::UpdateAnnotationBuffer { text } => {
                handlers::annotation::update_buffer(state, text)
            }
            AppCommand::SaveAnnotation => handlers::annotation::save(state)?,
            AppCommand::CancelAnnotationEdit => handlers::annotation::cancel(state),

            // === Karten-Sitzung ===
            AppCommand::SetMapId { map_id } => handlers::session::set_map_id(state, map_id),
            AppCommand::ReportMapIdFailure { message } => {
                handlers::session::report_failure(state, message)
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}
