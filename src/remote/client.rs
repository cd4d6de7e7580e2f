use crate::core::MapId;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use std::sync::mpsc::{self, Receiver};

/// Antwort des Backends auf `POST /maps`.
#[derive(Debug, Deserialize)]
struct CreateMapResponse {
    id: String,
}

/// Blockierender Client für das Walkmap-Backend.
pub struct MapApiClient {
    client: Client,
    base_url: String,
}

impl MapApiClient {
    /// Erstellt einen Client für die angegebene Basis-URL (z.B. `http://localhost:8080`).
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("walkmap/", env!("CARGO_PKG_VERSION"))),
        );
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("HTTP-Client konnte nicht erstellt werden")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL des Endpunkts zum Anlegen einer Karte.
    pub fn maps_url(&self) -> String {
        format!("{}/maps", self.base_url)
    }

    /// Legt eine neue Karte an und liefert deren ID.
    pub fn create_map(&self) -> Result<MapId> {
        let url = self.maps_url();
        let response = self
            .client
            .post(&url)
            .send()
            .with_context(|| format!("POST {} fehlgeschlagen", url))?
            .error_for_status()
            .with_context(|| format!("POST {} abgelehnt", url))?;
        response
            .json::<CreateMapResponse>()
            .context("Antwort enthält keine Karten-ID")?
            .into_map_id()
    }
}

impl CreateMapResponse {
    fn into_map_id(self) -> Result<MapId> {
        Ok(MapId::parse(&self.id)?)
    }
}

/// Extrahiert die Karten-ID aus dem JSON-Body `{"id": "..."}`.
pub fn parse_create_map_response(body: &str) -> Result<MapId> {
    let response: CreateMapResponse =
        serde_json::from_str(body).context("Antwort enthält keine Karten-ID")?;
    response.into_map_id()
}

/// Startet die einmalige Anfrage im Hintergrund.
///
/// Kein Retry, kein eigener Timeout, kein Abbruch. Das Ergebnis wird genau
/// einmal über den Channel geliefert.
pub fn spawn_create_map(base_url: String) -> Receiver<Result<MapId>> {
    let (sender, receiver) = mpsc::channel();
    std::thread::spawn(move || {
        let result = MapApiClient::new(&base_url).and_then(|client| client.create_map());
        if sender.send(result).is_err() {
            log::debug!("Karten-ID-Empfänger bereits beendet");
        }
    });
    receiver
}
