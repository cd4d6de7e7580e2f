//! Parser für Walkmap-JSON-Dateien.

use super::{MapDocument, DOCUMENT_VERSION};
use crate::core::{LatLng, MapId, MarkerStore};
use anyhow::{bail, Context, Result};

/// Ergebnis des Ladens einer Karte.
#[derive(Debug)]
pub struct LoadedMap {
    /// Gespeicherte Karten-ID (falls die Karte schon eine hatte)
    pub map_id: Option<MapId>,
    /// Marker in gespeicherter Reihenfolge, ohne Selektion
    pub store: MarkerStore,
    /// Anzahl verworfener Marker mit doppelten Koordinaten
    pub skipped_duplicates: usize,
}

/// Parsed eine Walkmap-Karte aus einem JSON-String.
///
/// Marker werden nach `order_parameter` sortiert (stabil) und erhalten neue
/// IDs. Doppelte Koordinaten werden verworfen, der erste Eintrag gewinnt.
pub fn parse_map_document(json_content: &str) -> Result<LoadedMap> {
    let mut document: MapDocument =
        serde_json::from_str(json_content).context("Ungültiges Walkmap-JSON")?;

    if document.version != DOCUMENT_VERSION {
        bail!(
            "Nicht unterstützte Dateiversion {} (erwartet {})",
            document.version,
            DOCUMENT_VERSION
        );
    }

    document
        .markers
        .sort_by(|a, b| a.order_parameter.total_cmp(&b.order_parameter));

    let mut store = MarkerStore::new();
    let mut skipped_duplicates = 0;
    for (index, record) in document.markers.into_iter().enumerate() {
        let position = LatLng::new(record.lat, record.lng)
            .with_context(|| format!("Marker {} hat ungültige Koordinaten", index + 1))?;
        if store
            .push_loaded(position, record.text_annotation, record.order_parameter)
            .is_none()
        {
            log::warn!("Doppelter Marker bei {} verworfen", position);
            skipped_duplicates += 1;
        }
    }

    Ok(LoadedMap {
        map_id: document.map_id,
        store,
        skipped_duplicates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sorts_by_order_parameter() {
        let json = r#"{
            "version": 1,
            "map_id": "ABCDE",
            "markers": [
                {"lat": 2.0, "lng": 2.0, "order_parameter": 100.0},
                {"lat": 1.0, "lng": 1.0, "text_annotation": "Start", "order_parameter": 0.0},
                {"lat": 1.5, "lng": 1.5, "order_parameter": 50.0}
            ]
        }"#;

        let loaded = parse_map_document(json).unwrap();
        assert_eq!(loaded.map_id.as_ref().map(|id| id.as_str()), Some("ABCDE"));
        let lats: Vec<f64> = loaded.store.iter().map(|m| m.position.lat).collect();
        assert_eq!(lats, vec![1.0, 1.5, 2.0]);
        assert_eq!(
            loaded.store.get_index(0).unwrap().text_annotation.as_deref(),
            Some("Start")
        );
        assert_eq!(loaded.store.selected_id(), None);
        assert_eq!(loaded.skipped_duplicates, 0);
    }

    #[test]
    fn test_parse_drops_duplicate_coordinates() {
        let json = r#"{"version": 1, "markers": [
            {"lat": 1.0, "lng": 1.0, "text_annotation": "erster", "order_parameter": 0.0},
            {"lat": 1.0, "lng": 1.0, "text_annotation": "zweiter", "order_parameter": 100.0}
        ]}"#;

        let loaded = parse_map_document(json).unwrap();
        assert!(loaded.map_id.is_none());
        assert_eq!(loaded.store.len(), 1);
        assert_eq!(loaded.skipped_duplicates, 1);
        assert_eq!(
            loaded.store.get_index(0).unwrap().text_annotation.as_deref(),
            Some("erster")
        );
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert!(parse_map_document("kein json").is_err());
        assert!(parse_map_document(r#"{"version": 2, "markers": []}"#).is_err());
        assert!(parse_map_document(
            r#"{"version": 1, "markers": [{"lat": 95.0, "lng": 0.0, "order_parameter": 0.0}]}"#
        )
        .is_err());
        assert!(parse_map_document(r#"{"version": 1, "map_id": "abc"}"#).is_err());
    }
}
