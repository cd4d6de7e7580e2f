use crate::app::{AppCommand, AppIntent, AppState, PlacementMode};
use crate::core::LatLng;

use super::map_intent_to_commands;

fn state_with_viewport() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    state.view.camera.zoom = 100.0;
    state
}

#[test]
fn save_requested_maps_to_save_file_without_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::SaveFile { path: None }));
}

#[test]
fn map_click_near_marker_selects_it() {
    let mut state = state_with_viewport();
    let position = LatLng::new(10.0, 20.0).unwrap();
    let id = state.store.add(position).unwrap();
    state.store.clear_selection();

    // 1 Pixel daneben (Pick-Radius 10 px)
    let world_pos = position.to_world() + glam::Vec2::new(0.3, 0.0);
    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { world_pos });

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SelectMarker { marker_id } if marker_id == id
    ));
}

#[test]
fn map_click_on_empty_area_places_marker_with_current_mode() {
    let mut state = state_with_viewport();
    state.store.add(LatLng::new(10.0, 20.0).unwrap());
    state.placement = PlacementMode::InsertBefore;

    let world_pos = LatLng::new(12.0, 22.0).unwrap().to_world();
    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { world_pos });

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::PlaceMarker {
            position,
            placement,
        } => {
            assert!((position.lat - 12.0).abs() < 1e-3);
            assert!((position.lng - 22.0).abs() < 1e-3);
            assert_eq!(*placement, PlacementMode::InsertBefore);
        }
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn annotation_intents_map_one_to_one() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::AnnotationBufferChanged {
            text: "Aussicht".to_string(),
        },
    );
    assert!(matches!(
        &commands[..],
        [AppCommand::UpdateAnnotationBuffer { text }] if text == "Aussicht"
    ));

    let commands = map_intent_to_commands(&state, AppIntent::CancelAnnotationRequested);
    assert!(matches!(commands[..], [AppCommand::CancelAnnotationEdit]));
}
