use crate::core::InsertSide;

/// Wohin der nächste Klick auf die Karte einen neuen Marker setzt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    /// Standard: ans Listenende anhängen
    #[default]
    Append,
    /// Vor dem selektierten Marker einfügen
    InsertBefore,
    /// Hinter dem selektierten Marker einfügen
    InsertAfter,
}

impl PlacementMode {
    /// Einfügeseite relativ zur Selektion (`None` = anhängen).
    pub fn insert_side(self) -> Option<InsertSide> {
        match self {
            Self::Append => None,
            Self::InsertBefore => Some(InsertSide::Before),
            Self::InsertAfter => Some(InsertSide::After),
        }
    }
}
