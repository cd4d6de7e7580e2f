//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld den Fokus hat, werden nur die Ctrl-Kombinationen
/// und Escape (Abbruch der Notiz-Bearbeitung) ausgewertet.
pub fn collect_keyboard_intents(
    ui: &egui::Ui,
    has_selection: bool,
    is_editing: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Ctrl+O (Öffnen), Ctrl+S (Speichern), Ctrl+Shift+S (Speichern unter)
    let (modifiers, key_o_pressed, key_s_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
        )
    });

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_s_pressed {
        events.push(if modifiers.shift {
            AppIntent::SaveAsRequested
        } else {
            AppIntent::SaveRequested
        });
    }

    // Escape bricht die Bearbeitung auch bei fokussiertem Notizfeld ab
    let key_escape = ui.input(|i| i.key_pressed(egui::Key::Escape));
    if is_editing && key_escape {
        events.push(AppIntent::CancelAnnotationRequested);
    }

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (key_prev, key_next, key_delete, key_plus, key_minus) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::ArrowUp),
            i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::ArrowDown),
            i.key_pressed(egui::Key::Delete),
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
        )
    });

    if has_selection {
        if key_prev {
            events.push(AppIntent::SelectPreviousRequested);
        }
        if key_next {
            events.push(AppIntent::SelectNextRequested);
        }
        if key_delete {
            events.push(AppIntent::DeleteSelectedRequested);
        }
    }

    if key_escape && !is_editing && has_selection {
        events.push(AppIntent::ClearSelectionRequested);
    }

    if key_plus {
        events.push(AppIntent::ZoomInRequested);
    }
    if key_minus {
        events.push(AppIntent::ZoomOutRequested);
    }

    events
}
