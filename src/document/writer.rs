//! Writer für Walkmap-JSON-Dateien.

use super::{MapDocument, MarkerRecord, DOCUMENT_VERSION};
use crate::core::{MapId, MarkerStore};
use anyhow::Result;

/// Schreibt die Marker einer Karte als JSON (Listenreihenfolge bleibt erhalten).
pub fn write_map_document(map_id: Option<&MapId>, store: &MarkerStore) -> Result<String> {
    let document = MapDocument {
        version: DOCUMENT_VERSION,
        map_id: map_id.cloned(),
        markers: store
            .iter()
            .map(|m| MarkerRecord {
                lat: m.position.lat,
                lng: m.position.lng,
                text_annotation: m.text_annotation.clone(),
                order_parameter: m.order_parameter,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
