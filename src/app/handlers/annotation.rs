//! Handler für den Notiz-Editor.

use crate::app::use_cases;
use crate::app::AppState;

/// Startet die Bearbeitung der Notiz des selektierten Markers.
pub fn begin_edit(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::annotation::begin_edit(state)
}

/// Aktualisiert den Entwurf.
pub fn update_buffer(state: &mut AppState, text: String) {
    use_cases::annotation::update_buffer(state, text);
}

/// Übernimmt den Entwurf in den selektierten Marker.
pub fn save(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::annotation::save(state)
}

/// Verwirft den Entwurf.
pub fn cancel(state: &mut AppState) {
    use_cases::annotation::cancel(state);
}
