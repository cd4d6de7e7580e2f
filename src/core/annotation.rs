//! Zustandsautomat für die Notiz des selektierten Markers (Ansicht ↔ Bearbeitung).

use super::{MarkerStore, MarkerStoreError};

/// Modus des Notiz-Editors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Notiz anzeigen, "Bearbeiten" anbieten
    #[default]
    View,
    /// Notiz bearbeiten; `buffer` ist der noch nicht übernommene Entwurf
    Edit { buffer: String },
}

/// Notiz-Editor des Seitenpanels.
#[derive(Debug, Clone, Default)]
pub struct AnnotationEditor {
    mode: EditorMode,
}

impl AnnotationEditor {
    /// Erstellt einen Editor im Ansichtsmodus.
    pub fn new() -> Self {
        Self {
            mode: EditorMode::View,
        }
    }

    /// Aktueller Modus.
    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Gibt `true` zurück, wenn gerade bearbeitet wird.
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Edit { .. })
    }

    /// Entwurfstext im Bearbeitungsmodus.
    pub fn buffer(&self) -> Option<&str> {
        match &self.mode {
            EditorMode::Edit { buffer } => Some(buffer),
            EditorMode::View => None,
        }
    }

    /// Wechselt in den Bearbeitungsmodus; der Entwurf startet mit der aktuellen Notiz.
    pub fn begin_edit(&mut self, store: &MarkerStore) -> Result<(), MarkerStoreError> {
        let marker = store.selected().ok_or(MarkerStoreError::NoSelection)?;
        self.mode = EditorMode::Edit {
            buffer: marker.text_annotation.clone().unwrap_or_default(),
        };
        Ok(())
    }

    /// Ersetzt den Entwurf. Im Ansichtsmodus ohne Wirkung.
    pub fn update_buffer(&mut self, text: String) {
        if let EditorMode::Edit { buffer } = &mut self.mode {
            *buffer = text;
        }
    }

    /// Übernimmt den Entwurf in den selektierten Marker und kehrt zur Ansicht zurück.
    ///
    /// Gibt `true` zurück, wenn sich die Notiz geändert hat. Ein unveränderter
    /// Entwurf (auch ein leerer Entwurf bei einem Marker ohne Notiz) wird nicht
    /// geschrieben. Schlägt die Vorbedingung fehl (keine Selektion), bleibt der
    /// Editor im Bearbeitungsmodus und der Store unverändert.
    pub fn save(&mut self, store: &mut MarkerStore) -> Result<bool, MarkerStoreError> {
        let EditorMode::Edit { buffer } = &self.mode else {
            return Ok(false);
        };
        let current = store.selected().ok_or(MarkerStoreError::NoSelection)?;

        let unchanged = current.text_annotation.as_deref().unwrap_or_default() == buffer.as_str();
        if !unchanged {
            store.set_selected_text(buffer.clone())?;
        }
        self.mode = EditorMode::View;
        Ok(!unchanged)
    }

    /// Verwirft den Entwurf und kehrt zur Ansicht zurück.
    pub fn cancel(&mut self) {
        self.mode = EditorMode::View;
    }

    /// Reagiert auf einen Selektionswechsel.
    ///
    /// Wird aus "nichts selektiert" heraus ein Marker selektiert, startet der
    /// Editor in der Ansicht, falls der Marker eine Notiz hat, sonst direkt in
    /// der Bearbeitung. Bei einem Wechsel zwischen zwei Markern bleibt der
    /// Modus erhalten; ein offener Entwurf wird aus dem neuen Marker befüllt.
    pub fn on_selection_changed(&mut self, had_selection: bool, store: &MarkerStore) {
        let Some(marker) = store.selected() else {
            return;
        };
        if !had_selection {
            self.mode = if marker.has_text() {
                EditorMode::View
            } else {
                EditorMode::Edit {
                    buffer: String::new(),
                }
            };
        } else if let EditorMode::Edit { buffer } = &mut self.mode {
            *buffer = marker.text_annotation.clone().unwrap_or_default();
        }
    }

    /// Setzt den Editor in den Ansichtsmodus zurück (z.B. nach dem Laden).
    pub fn reset(&mut self) {
        self.mode = EditorMode::View;
    }
}
