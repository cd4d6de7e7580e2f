//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::LatLng;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveFilePathSelected { path } => vec![AppCommand::SaveFile { path: Some(path) }],

        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::FitMarkersRequested => vec![AppCommand::FitCameraToMarkers],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],

        AppIntent::MapClicked { world_pos } => {
            let max_distance = state.view.camera.pick_radius_world(
                state.view.viewport_size[1],
                state.options.selection_pick_radius_px,
            );

            match state.store.nearest_within(world_pos, max_distance) {
                Some(marker_id) => vec![AppCommand::SelectMarker { marker_id }],
                None => vec![AppCommand::PlaceMarker {
                    position: LatLng::from_world(world_pos),
                    placement: state.placement,
                }],
            }
        }
        AppIntent::MarkerClicked { marker_id } => vec![AppCommand::SelectMarker { marker_id }],
        AppIntent::SetPlacementModeRequested { mode } => {
            vec![AppCommand::SetPlacementMode { mode }]
        }
        AppIntent::SelectPreviousRequested => vec![AppCommand::SelectPreviousMarker],
        AppIntent::SelectNextRequested => vec![AppCommand::SelectNextMarker],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedMarker],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],

        AppIntent::EditAnnotationRequested => vec![AppCommand::BeginAnnotationEdit],
        AppIntent::AnnotationBufferChanged { text } => {
            vec![AppCommand::UpdateAnnotationBuffer { text }]
        }
        AppIntent::SaveAnnotationRequested => vec![AppCommand::SaveAnnotation],
        AppIntent::CancelAnnotationRequested => vec![AppCommand::CancelAnnotationEdit],

        AppIntent::MapIdReceived { map_id } => vec![AppCommand::SetMapId { map_id }],
        AppIntent::MapIdFetchFailed { message } => {
            vec![AppCommand::ReportMapIdFailure { message }]
        }

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests;
