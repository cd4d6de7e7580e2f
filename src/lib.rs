//! Walkmap Marker-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod document;
pub mod remote;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, PlacementMode, SessionState, UiState,
    ViewState,
};
pub use core::{
    AnnotationEditor, Camera2D, EditorMode, LatLng, MapId, Marker, MarkerId, MarkerStore,
    MarkerStoreError,
};
pub use document::{parse_map_document, write_map_document, LoadedMap};
pub use remote::MapApiClient;
pub use shared::EditorOptions;
