//! Handler für die Karten-Sitzung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MapId;

/// Übernimmt die Karten-ID vom Backend.
pub fn set_map_id(state: &mut AppState, map_id: MapId) {
    use_cases::session::set_map_id(state, map_id);
}

/// Meldet eine gescheiterte Karten-Anfrage.
pub fn report_failure(state: &mut AppState, message: String) {
    use_cases::session::report_failure(state, message);
}
