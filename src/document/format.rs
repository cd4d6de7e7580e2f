use crate::core::MapId;
use serde::{Deserialize, Serialize};

/// Aktuelle Version des Dateiformats.
pub const DOCUMENT_VERSION: u32 = 1;

/// Serialisierte Form einer Karte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDocument {
    pub version: u32,
    #[serde(default)]
    pub map_id: Option<MapId>,
    #[serde(default)]
    pub markers: Vec<MarkerRecord>,
}

/// Serialisierte Form eines Markers (ohne Laufzeit-ID).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerRecord {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_annotation: Option<String>,
    pub order_parameter: f64,
}
