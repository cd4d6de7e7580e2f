//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::state::{PlacementMode, SessionState};
use crate::app::AppState;
use crate::document::{parse_map_document, write_map_document};
use anyhow::Context;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Lädt die ausgewählte Karte in den AppState.
///
/// Ersetzt die Marker-Liste, hebt die Selektion auf und zentriert die
/// Kamera. Enthält die Datei eine Karten-ID, wird sie zur aktiven Karte.
pub fn load_selected_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path))?;
    let loaded = parse_map_document(&content)
        .with_context(|| format!("Karte konnte nicht geladen werden: {}", path))?;

    log::info!(
        "Karte geladen: {} Marker aus {}",
        loaded.store.len(),
        path
    );

    state.ui.status_message = if loaded.skipped_duplicates > 0 {
        let msg = format!(
            "{} Marker mit doppelten Koordinaten übersprungen",
            loaded.skipped_duplicates
        );
        log::warn!("{}", msg);
        Some(msg)
    } else {
        None
    };

    if let Some(map_id) = loaded.map_id {
        state.session = SessionState::Ready { map_id };
    }

    state.store = loaded.store;
    state.annotation.reset();
    state.placement = PlacementMode::Append;
    state.ui.current_file_path = Some(path);
    state.ui.has_unsaved_changes = false;

    super::camera::fit_to_markers(state);
    Ok(())
}

/// Speichert unter dem angegebenen Pfad bzw. dem aktuellen Pfad.
///
/// Ohne bekannten Pfad wird stattdessen der Save-Dialog geöffnet.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    match path {
        Some(path) => save_file_as(state, path),
        None => save_current_file(state),
    }
}

/// Speichert die aktuelle Datei (wenn Pfad bekannt) oder öffnet Dialog.
pub fn save_current_file(state: &mut AppState) -> anyhow::Result<()> {
    if let Some(path) = state.ui.current_file_path.clone() {
        write_map_to_file(state, &path)?;
        state.ui.has_unsaved_changes = false;
        log::info!("Karte gespeichert: {}", path);
    } else {
        request_save_file(state);
    }
    Ok(())
}

/// Speichert die Karte unter einem neuen Pfad und merkt ihn sich.
pub fn save_file_as(state: &mut AppState, path: String) -> anyhow::Result<()> {
    write_map_to_file(state, &path)?;
    log::info!("Karte gespeichert als: {}", path);
    state.ui.current_file_path = Some(path);
    state.ui.has_unsaved_changes = false;
    Ok(())
}

fn write_map_to_file(state: &AppState, path: &str) -> anyhow::Result<()> {
    let json = write_map_document(state.session.map_id(), &state.store)?;
    std::fs::write(path, json)
        .with_context(|| format!("Datei konnte nicht geschrieben werden: {}", path))?;
    Ok(())
}
