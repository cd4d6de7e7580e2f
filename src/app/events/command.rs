use crate::app::state::PlacementMode;
use crate::core::{LatLng, MapId, MarkerId};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Datei-Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// Karte aus Datei laden
    LoadFile { path: String },
    /// Karte speichern (`None` = aktueller Pfad bzw. Dialog)
    SaveFile { path: Option<String> },
    /// Anwendung beenden
    RequestExit,

    /// Kamera auf Startposition zurücksetzen
    ResetCamera,
    /// Kamera auf alle Marker ausrichten
    FitCameraToMarkers,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Neuen Marker setzen (Anhängen oder relativ zur Selektion)
    PlaceMarker {
        position: LatLng,
        placement: PlacementMode,
    },
    /// Marker selektieren
    SelectMarker { marker_id: MarkerId },
    /// Vorgänger selektieren
    SelectPreviousMarker,
    /// Nachfolger selektieren
    SelectNextMarker,
    /// Selektierten Marker löschen
    DeleteSelectedMarker,
    /// Selektion aufheben
    ClearSelection,
    /// Platzierungsmodus setzen
    SetPlacementMode { mode: PlacementMode },

    /// Notiz-Editor in den Bearbeitungsmodus schalten
    BeginAnnotationEdit,
    /// Notiz-Entwurf ersetzen
    UpdateAnnotationBuffer { text: String },
    /// Notiz-Entwurf in den selektierten Marker übernehmen
    SaveAnnotation,
    /// Notiz-Entwurf verwerfen
    CancelAnnotationEdit,

    /// Karten-ID übernehmen
    SetMapId { map_id: MapId },
    /// Fehlgeschlagene ID-Anfrage melden
    ReportMapIdFailure { message: String },

    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
}
