//! Core-Domänentypen: Koordinaten, Marker, Marker-Store, Notiz-Editor, Kamera.

pub mod annotation;
pub mod camera;
pub mod geo;
pub mod map_id;
pub mod marker;
/// Geordnete Marker-Liste mit Selektion
///
/// Dieses Modul enthält die zentrale Listenverwaltung:
/// - Anhängen und relatives Einfügen mit Duplikat-Prüfung
/// - Navigation Vorgänger/Nachfolger ohne Umlauf
/// - Löschen des selektierten Markers
pub mod marker_store;

pub use annotation::{AnnotationEditor, EditorMode};
pub use camera::Camera2D;
pub use geo::{CoordinateError, LatLng, WORLD_UNITS_PER_DEGREE};
pub use map_id::{MapId, MapIdError};
pub use marker::{Marker, MarkerId};
pub use marker_store::{InsertSide, MarkerStore, MarkerStoreError, ORDER_PARAMETER_STEP};
