use crate::app::state::PlacementMode;
use crate::core::{MapId, MarkerId};
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },

    /// Kamera auf Startposition zurücksetzen
    ResetCameraRequested,
    /// Kamera auf alle Marker ausrichten
    FitMarkersRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Klick auf die Karte: trifft einen Marker (Selektion) oder setzt einen neuen
    MapClicked { world_pos: glam::Vec2 },
    /// Marker direkt angeklickt (z.B. in der Markerliste)
    MarkerClicked { marker_id: MarkerId },
    /// Platzierungsmodus für den nächsten Kartenklick setzen
    SetPlacementModeRequested { mode: PlacementMode },
    /// Vorherigen Marker selektieren
    SelectPreviousRequested,
    /// Nächsten Marker selektieren
    SelectNextRequested,
    /// Selektierten Marker löschen
    DeleteSelectedRequested,
    /// Selektion aufheben
    ClearSelectionRequested,

    /// Notiz bearbeiten ("Bearbeiten"-Button)
    EditAnnotationRequested,
    /// Notiz-Entwurf geändert (Texteingabe)
    AnnotationBufferChanged { text: String },
    /// Notiz-Entwurf speichern
    SaveAnnotationRequested,
    /// Notiz-Entwurf verwerfen
    CancelAnnotationRequested,

    /// Backend hat eine Karten-ID geliefert
    MapIdReceived { map_id: MapId },
    /// Anfrage nach der Karten-ID ist gescheitert
    MapIdFetchFailed { message: String },

    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofort anwenden)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
