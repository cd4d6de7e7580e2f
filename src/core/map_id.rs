use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Länge einer Karten-ID.
pub const MAP_ID_LEN: usize = 5;

/// Fehler beim Parsen einer Karten-ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapIdError {
    #[error("Karten-ID muss 5 Zeichen lang sein, war {0}")]
    InvalidLength(usize),
    #[error("Karten-ID darf nur A-Z enthalten: {0:?}")]
    InvalidCharacter(String),
}

/// Vom Backend vergebene Karten-ID (fünf Großbuchstaben, z.B. `"QWERT"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MapId(String);

impl MapId {
    /// Prüft und übernimmt eine ID.
    pub fn parse(raw: &str) -> Result<Self, MapIdError> {
        let len = raw.chars().count();
        if len != MAP_ID_LEN {
            return Err(MapIdError::InvalidLength(len));
        }
        if !raw.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(MapIdError::InvalidCharacter(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Die ID als String.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Editor-Route dieser Karte.
    pub fn route(&self) -> String {
        format!("/map/{}", self.0)
    }
}

impl TryFrom<String> for MapId {
    type Error = MapIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MapId> for String {
    fn from(id: MapId) -> Self {
        id.0
    }
}

impl std::fmt::Display for MapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        let id = MapId::parse("ABCDE").unwrap();
        assert_eq!(id.as_str(), "ABCDE");
        assert_eq!(id.route(), "/map/ABCDE");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(MapId::parse("ABCD"), Err(MapIdError::InvalidLength(4)));
        assert_eq!(MapId::parse("ABCDEF"), Err(MapIdError::InvalidLength(6)));
        assert!(matches!(
            MapId::parse("abcde"),
            Err(MapIdError::InvalidCharacter(_))
        ));
        assert!(matches!(
            MapId::parse("AB1DE"),
            Err(MapIdError::InvalidCharacter(_))
        ));
    }

    #[test]
    fn test_serde_validates() {
        let id: MapId = serde_json::from_str("\"QWERT\"").unwrap();
        assert_eq!(id.as_str(), "QWERT");
        assert!(serde_json::from_str::<MapId>("\"qwert\"").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"QWERT\"");
    }
}
