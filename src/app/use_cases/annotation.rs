//! Use-Case-Funktionen für den Notiz-Editor des selektierten Markers.

use crate::app::AppState;

/// Wechselt in den Bearbeitungsmodus (Entwurf = aktuelle Notiz).
pub fn begin_edit(state: &mut AppState) -> anyhow::Result<()> {
    state.annotation.begin_edit(&state.store)?;
    Ok(())
}

/// Ersetzt den Entwurf durch den aktuellen Text des Eingabefelds.
pub fn update_buffer(state: &mut AppState, text: String) {
    state.annotation.update_buffer(text);
}

/// Schreibt den Entwurf in den selektierten Marker.
///
/// Ohne Selektion schlägt das Speichern fehl; Editor und Store bleiben
/// unverändert.
pub fn save(state: &mut AppState) -> anyhow::Result<()> {
    if !state.annotation.is_editing() {
        return Ok(());
    }

    if !state.annotation.save(&mut state.store)? {
        log::debug!("Notiz unverändert, nichts zu speichern");
        return Ok(());
    }
    state.ui.has_unsaved_changes = true;

    if let Some(marker) = state.store.selected() {
        log::info!("Notiz für Marker {} gespeichert", marker.id);
    }
    Ok(())
}

/// Verwirft den Entwurf.
pub fn cancel(state: &mut AppState) {
    state.annotation.cancel();
}
