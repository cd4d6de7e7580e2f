use crate::app::CommandLog;
use crate::core::{AnnotationEditor, MarkerStore};
use crate::shared::EditorOptions;

use super::{PlacementMode, SessionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Marker-Liste samt Selektion
    pub store: MarkerStore,
    /// Notiz-Editor des Seitenpanels
    pub annotation: AnnotationEditor,
    /// Platzierungsmodus für den nächsten Kartenklick
    pub placement: PlacementMode,
    /// Aktuelle Karte (ID vom Backend)
    pub session: SessionState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Backend-URL)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            store: MarkerStore::new(),
            annotation: AnnotationEditor::new(),
            placement: PlacementMode::Append,
            session: SessionState::Fetching,
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Marker zurück (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.store.len()
    }

    /// Fenstertitel inkl. Karten-Route.
    pub fn window_title(&self) -> String {
        match self.session.route() {
            Some(route) => format!("Walkmap · {}", route),
            None => "Walkmap · Karte wird angelegt...".to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
