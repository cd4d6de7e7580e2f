//! Use-Case-Funktionen für die Karten-Sitzung (Karten-ID vom Backend).

use crate::app::state::SessionState;
use crate::app::AppState;
use crate::core::MapId;

/// Übernimmt die vom Backend vergebene Karten-ID.
///
/// Ist bereits eine Karte aktiv (z.B. aus einer geladenen Datei), bleibt sie
/// erhalten.
pub fn set_map_id(state: &mut AppState, map_id: MapId) {
    if let Some(current) = state.session.map_id() {
        log::warn!(
            "Karten-ID {} empfangen, behalte aktive Karte {}",
            map_id,
            current
        );
        return;
    }

    log::info!("Karte angelegt: {}", map_id.route());
    state.session = SessionState::Ready { map_id };
    state.ui.status_message = None;
}

/// Meldet das Scheitern der Karten-Anfrage. Die Sitzung bleibt im Zustand `Fetching`.
pub fn report_failure(state: &mut AppState, message: String) {
    log::error!("Karten-ID konnte nicht geholt werden: {}", message);
    state.ui.status_message = Some(format!("Karte konnte nicht angelegt werden: {}", message));
}
