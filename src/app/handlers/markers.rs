//! Handler für Marker-Platzierung, Navigation und Löschen.

use crate::app::state::PlacementMode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{LatLng, MarkerId};

/// Setzt einen neuen Marker gemäß Platzierungsmodus.
pub fn place(state: &mut AppState, position: LatLng, placement: PlacementMode) {
    use_cases::markers::place_marker(state, position, placement);
}

/// Selektiert einen Marker per ID.
pub fn select(state: &mut AppState, marker_id: MarkerId) {
    use_cases::markers::select_marker(state, marker_id);
}

/// Springt zum vorherigen Marker.
pub fn select_previous(state: &mut AppState) {
    use_cases::markers::select_previous(state);
}

/// Springt zum nächsten Marker.
pub fn select_next(state: &mut AppState) {
    use_cases::markers::select_next(state);
}

/// Löscht den selektierten Marker.
pub fn delete_selected(state: &mut AppState) {
    use_cases::markers::delete_selected(state);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    use_cases::markers::clear_selection(state);
}

/// Setzt den Platzierungsmodus.
pub fn set_placement_mode(state: &mut AppState, mode: PlacementMode) {
    use_cases::markers::set_placement_mode(state, mode);
}
