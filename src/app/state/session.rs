use crate::core::MapId;

/// Lebenszyklus der aktuellen Karte.
///
/// Die Karten-ID wird einmalig beim Start vom Backend geholt. Schlägt die
/// Anfrage fehl, bleibt der Zustand dauerhaft `Fetching`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Anfrage läuft (oder ist gescheitert)
    #[default]
    Fetching,
    /// Karte ist angelegt
    Ready { map_id: MapId },
}

impl SessionState {
    /// Karten-ID, sobald vorhanden.
    pub fn map_id(&self) -> Option<&MapId> {
        match self {
            Self::Ready { map_id } => Some(map_id),
            Self::Fetching => None,
        }
    }

    /// Editor-Route der Karte (`/map/<id>`).
    pub fn route(&self) -> Option<String> {
        self.map_id().map(MapId::route)
    }

    /// Gibt `true` zurück, solange keine ID vorliegt.
    pub fn is_fetching(&self) -> bool {
        matches!(self, Self::Fetching)
    }
}
