/// UI-bezogener Anwendungszustand (Dialog-Flags, Dateipfade, Statuszeile)
#[derive(Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Pfad der aktuell geladenen/gespeicherten Datei (für Save ohne Dialog)
    pub current_file_path: Option<String>,
    /// Ungespeicherte Änderungen vorhanden
    pub has_unsaved_changes: bool,
    /// Temporäre Statusnachricht (z.B. Fehler beim Holen der Karten-ID)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_file_dialog: false,
            show_save_file_dialog: false,
            current_file_path: None,
            has_unsaved_changes: false,
            status_message: None,
        }
    }
}
