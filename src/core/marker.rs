use super::LatLng;

/// Stabile Marker-ID, vom Store bei der Erstellung vergeben.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein vom Benutzer gesetzter Punkt auf der Karte mit optionaler Notiz.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Stabile ID (Selektion und Löschen laufen über die ID, nie über Koordinaten)
    pub id: MarkerId,
    /// Position in Grad
    pub position: LatLng,
    /// Freitext-Notiz
    pub text_annotation: Option<String>,
    /// Persistierter Sortierschlüssel
    pub order_parameter: f64,
}

impl Marker {
    /// Erstellt einen Marker ohne Notiz.
    pub fn new(id: MarkerId, position: LatLng, order_parameter: f64) -> Self {
        Self {
            id,
            position,
            text_annotation: None,
            order_parameter,
        }
    }

    /// Gibt `true` zurück, wenn eine nicht-leere Notiz vorhanden ist.
    pub fn has_text(&self) -> bool {
        self.text_annotation.as_deref().is_some_and(|t| !t.is_empty())
    }
}
