//! Use-Case-Funktionen für Marker-Platzierung, Selektion und Löschen.

use crate::app::state::PlacementMode;
use crate::app::AppState;
use crate::core::{LatLng, MarkerId};

/// Setzt einen Marker an `position` gemäß Platzierungsmodus.
///
/// Doppelte Koordinaten werden still ignoriert (Liste und Selektion bleiben
/// unverändert). Nach einem Einfügen vor/hinter der Selektion fällt der
/// Modus auf `Append` zurück.
pub fn place_marker(state: &mut AppState, position: LatLng, placement: PlacementMode) {
    let had_selection = state.store.selected_id().is_some();

    let inserted = match placement.insert_side() {
        Some(side) => state.store.insert_relative(position, side),
        None => state.store.add(position),
    };

    let Some(id) = inserted else {
        log::debug!("Marker bei {} existiert bereits, ignoriert", position);
        return;
    };

    log::info!(
        "Marker {} gesetzt bei {} ({:?}), {} Marker gesamt",
        id,
        position,
        placement,
        state.store.len()
    );

    state.placement = PlacementMode::Append;
    state.ui.has_unsaved_changes = true;
    state.annotation.on_selection_changed(had_selection, &state.store);
}

/// Selektiert einen Marker per ID. Unbekannte IDs werden ignoriert.
pub fn select_marker(state: &mut AppState, marker_id: MarkerId) {
    if state.store.selected_id() == Some(marker_id) {
        return;
    }

    let had_selection = state.store.selected_id().is_some();
    if !state.store.select(marker_id) {
        log::warn!("Marker {} nicht gefunden, Selektion unverändert", marker_id);
        return;
    }

    state.annotation.on_selection_changed(had_selection, &state.store);
}

/// Selektiert den Vorgänger des selektierten Markers (ohne Umlauf).
pub fn select_previous(state: &mut AppState) {
    if state.store.select_previous() {
        state.annotation.on_selection_changed(true, &state.store);
    } else {
        log::debug!("Kein Vorgänger vorhanden");
    }
}

/// Selektiert den Nachfolger des selektierten Markers (ohne Umlauf).
pub fn select_next(state: &mut AppState) {
    if state.store.select_next() {
        state.annotation.on_selection_changed(true, &state.store);
    } else {
        log::debug!("Kein Nachfolger vorhanden");
    }
}

/// Löscht den selektierten Marker. Danach ist nichts selektiert.
pub fn delete_selected(state: &mut AppState) {
    let Some(removed) = state.store.remove_selected() else {
        log::debug!("Löschen ignoriert: kein Marker selektiert");
        return;
    };

    log::info!(
        "Marker {} bei {} gelöscht, {} Marker verbleiben",
        removed.id,
        removed.position,
        state.store.len()
    );

    state.annotation.reset();
    state.ui.has_unsaved_changes = true;
}

/// Hebt die Selektion auf und schließt einen offenen Entwurf.
pub fn clear_selection(state: &mut AppState) {
    state.store.clear_selection();
    state.annotation.reset();
}

/// Setzt den Platzierungsmodus für den nächsten Kartenklick.
pub fn set_placement_mode(state: &mut AppState, mode: PlacementMode) {
    state.placement = mode;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EditorMode;

    fn pos(lat: f64, lng: f64) -> LatLng {
        LatLng::new(lat, lng).unwrap()
    }

    #[test]
    fn place_marker_selects_new_marker_and_opens_editor() {
        let mut state = AppState::new();

        place_marker(&mut state, pos(1.0, 1.0), PlacementMode::Append);

        assert_eq!(state.store.len(), 1);
        assert!(state.store.selected_id().is_some());
        assert!(state.annotation.is_editing());
        assert!(state.ui.has_unsaved_changes);
    }

    #[test]
    fn place_duplicate_keeps_list_and_selection() {
        let mut state = AppState::new();
        place_marker(&mut state, pos(1.0, 1.0), PlacementMode::Append);
        let first = state.store.selected_id();
        place_marker(&mut state, pos(2.0, 2.0), PlacementMode::Append);
        select_marker(&mut state, first.unwrap());

        place_marker(&mut state, pos(2.0, 2.0), PlacementMode::Append);

        assert_eq!(state.store.len(), 2);
        assert_eq!(state.store.selected_id(), first);
    }

    #[test]
    fn insert_before_resets_placement_mode() {
        let mut state = AppState::new();
        place_marker(&mut state, pos(1.0, 1.0), PlacementMode::Append);
        state.placement = PlacementMode::InsertBefore;

        place_marker(&mut state, pos(3.0, 3.0), PlacementMode::InsertBefore);

        assert_eq!(state.placement, PlacementMode::Append);
        let first = state.store.get_index(0).unwrap();
        assert!(first.position.same_coordinates(&pos(3.0, 3.0)));
    }

    #[test]
    fn delete_clears_selection_and_editor() {
        let mut state = AppState::new();
        place_marker(&mut state, pos(1.0, 1.0), PlacementMode::Append);
        assert!(state.annotation.is_editing());

        delete_selected(&mut state);

        assert!(state.store.is_empty());
        assert_eq!(state.store.selected_id(), None);
        assert_eq!(state.annotation.mode(), &EditorMode::View);
    }

    #[test]
    fn select_unknown_marker_is_ignored() {
        let mut state = AppState::new();
        place_marker(&mut state, pos(1.0, 1.0), PlacementMode::Append);
        let selected = state.store.selected_id();

        select_marker(&mut state, MarkerId(999));

        assert_eq!(state.store.selected_id(), selected);
    }
}
