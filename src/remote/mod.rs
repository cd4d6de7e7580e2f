//! HTTP-Anbindung an das Walkmap-Backend.
//!
//! Einzige Anfrage: beim Start eine neue Karten-ID anlegen lassen.

mod client;

pub use client::{parse_create_map_response, spawn_create_map, MapApiClient};
