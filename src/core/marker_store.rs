//! Geordnete Marker-Liste mit Selektion.
//!
//! Einfüge-Reihenfolge == Anzeige- und Navigationsreihenfolge.
//! Koordinaten sind nur Duplikat-Schlüssel; Identität ist die `MarkerId`.

use super::{LatLng, Marker, MarkerId};
use glam::Vec2;
use indexmap::IndexMap;
use thiserror::Error;

/// Abstand des Sortierschlüssels beim Anhängen an ein Listenende.
pub const ORDER_PARAMETER_STEP: f64 = 100.0;

/// Verletzte Vorbedingungen bei Store-Operationen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerStoreError {
    #[error("Kein Marker selektiert")]
    NoSelection,
    #[error("Selektierter Marker {0} ist nicht in der Liste")]
    UnknownMarker(MarkerId),
}

/// Richtung für relatives Einfügen und Navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertSide {
    /// Vor dem selektierten Marker
    Before,
    /// Hinter dem selektierten Marker
    After,
}

/// Marker-Liste plus aktuell selektierter Marker.
#[derive(Debug, Clone)]
pub struct MarkerStore {
    markers: IndexMap<MarkerId, Marker>,
    selected: Option<MarkerId>,
    next_id: u64,
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            markers: IndexMap::new(),
            selected: None,
            next_id: 1,
        }
    }

    /// Anzahl der Marker.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn keine Marker vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iteriert in Listenreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// Marker per ID.
    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(&id)
    }

    /// Marker an Listenposition.
    pub fn get_index(&self, index: usize) -> Option<&Marker> {
        self.markers.get_index(index).map(|(_, m)| m)
    }

    /// ID des selektierten Markers (kann nur auf Listenelemente zeigen).
    pub fn selected_id(&self) -> Option<MarkerId> {
        self.selected
    }

    /// Der selektierte Marker.
    pub fn selected(&self) -> Option<&Marker> {
        self.selected.and_then(|id| self.markers.get(&id))
    }

    /// Listenposition eines Markers; `None` wenn nicht enthalten.
    pub fn find_position(&self, id: MarkerId) -> Option<usize> {
        self.markers.get_index_of(&id)
    }

    /// Listenposition des selektierten Markers.
    pub fn position_of_selected(&self) -> Option<usize> {
        self.selected.and_then(|id| self.find_position(id))
    }

    /// Lineare Suche nach exakt gleichen Koordinaten.
    pub fn find_by_coordinates(&self, position: &LatLng) -> Option<MarkerId> {
        self.markers
            .values()
            .find(|m| m.position.same_coordinates(position))
            .map(|m| m.id)
    }

    fn allocate_id(&mut self) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Hängt einen neuen Marker an und selektiert ihn.
    ///
    /// Existiert bereits ein Marker mit identischen Koordinaten, bleibt der
    /// Store unverändert (auch die Selektion) und es wird `None` geliefert.
    pub fn add(&mut self, position: LatLng) -> Option<MarkerId> {
        if let Some(existing) = self.find_by_coordinates(&position) {
            log::debug!("Marker {} liegt bereits auf {}", existing, position);
            return None;
        }

        let order_parameter = self
            .markers
            .last()
            .map_or(0.0, |(_, last)| last.order_parameter + ORDER_PARAMETER_STEP);
        let id = self.allocate_id();
        self.markers
            .insert(id, Marker::new(id, position, order_parameter));
        self.selected = Some(id);
        Some(id)
    }

    /// Fügt einen Marker direkt vor oder hinter dem selektierten ein.
    ///
    /// Der Sortierschlüssel ist der Mittelwert der Nachbarn bzw. an den
    /// Listenenden der Nachbarwert ∓ `ORDER_PARAMETER_STEP`. Ohne gültige
    /// Selektion verhält sich die Operation wie [`MarkerStore::add`].
    pub fn insert_relative(&mut self, position: LatLng, side: InsertSide) -> Option<MarkerId> {
        let Some(anchor_index) = self.position_of_selected() else {
            return self.add(position);
        };
        if self.find_by_coordinates(&position).is_some() {
            log::debug!("Einfügen übersprungen: Koordinaten {} belegt", position);
            return None;
        }

        let anchor_order = self.markers[anchor_index].order_parameter;
        let (insert_index, order_parameter) = match side {
            InsertSide::Before => {
                let order = match anchor_index.checked_sub(1) {
                    Some(prev) => (self.markers[prev].order_parameter + anchor_order) / 2.0,
                    None => anchor_order - ORDER_PARAMETER_STEP,
                };
                (anchor_index, order)
            }
            InsertSide::After => {
                let order = match self.markers.get_index(anchor_index + 1) {
                    Some((_, next)) => (anchor_order + next.order_parameter) / 2.0,
                    None => anchor_order + ORDER_PARAMETER_STEP,
                };
                (anchor_index + 1, order)
            }
        };

        let id = self.allocate_id();
        self.markers
            .shift_insert(insert_index, id, Marker::new(id, position, order_parameter));
        self.selected = Some(id);
        Some(id)
    }

    /// Übernimmt einen geladenen Marker unverändert ans Listenende (ohne Selektion).
    pub fn push_loaded(
        &mut self,
        position: LatLng,
        text_annotation: Option<String>,
        order_parameter: f64,
    ) -> Option<MarkerId> {
        if self.find_by_coordinates(&position).is_some() {
            return None;
        }
        let id = self.allocate_id();
        let mut marker = Marker::new(id, position, order_parameter);
        marker.text_annotation = text_annotation;
        self.markers.insert(id, marker);
        Some(id)
    }

    /// Selektiert einen Marker der Liste. Unbekannte IDs werden ignoriert.
    pub fn select(&mut self, id: MarkerId) -> bool {
        if self.markers.contains_key(&id) {
            self.selected = Some(id);
            true
        } else {
            log::warn!("Selektion ignoriert: Marker {} existiert nicht", id);
            false
        }
    }

    /// Hebt die Selektion auf.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Selektiert den Vorgänger. Am Listenanfang: No-op.
    pub fn select_previous(&mut self) -> bool {
        match self.position_of_selected() {
            Some(index) if index > 0 => self.select_index(index - 1),
            _ => false,
        }
    }

    /// Selektiert den Nachfolger. Am Listenende: No-op.
    pub fn select_next(&mut self) -> bool {
        match self.position_of_selected() {
            Some(index) if index + 1 < self.markers.len() => self.select_index(index + 1),
            _ => false,
        }
    }

    fn select_index(&mut self, index: usize) -> bool {
        match self.markers.get_index(index) {
            Some((id, _)) => {
                self.selected = Some(*id);
                true
            }
            None => false,
        }
    }

    /// Entfernt den selektierten Marker; die Reihenfolge der übrigen bleibt erhalten.
    ///
    /// Die Selektion rückt nicht auf einen Nachbarn vor, sondern wird geleert.
    pub fn remove_selected(&mut self) -> Option<Marker> {
        let id = self.selected?;
        let removed = self.markers.shift_remove(&id);
        if removed.is_some() {
            self.selected = None;
        }
        removed
    }

    /// Setzt die Notiz des selektierten Markers.
    pub fn set_selected_text(&mut self, text: String) -> Result<(), MarkerStoreError> {
        let id = self.selected.ok_or(MarkerStoreError::NoSelection)?;
        let marker = self
            .markers
            .get_mut(&id)
            .ok_or(MarkerStoreError::UnknownMarker(id))?;
        marker.text_annotation = Some(text);
        Ok(())
    }

    /// Nächster Marker zu einer Weltposition innerhalb von `max_distance`.
    pub fn nearest_within(&self, world_pos: Vec2, max_distance: f32) -> Option<MarkerId> {
        self.markers
            .values()
            .map(|m| (m.id, m.position.to_world().distance(world_pos)))
            .filter(|(_, dist)| *dist <= max_distance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Achsenparallele Bounding-Box aller Marker in Welteinheiten.
    pub fn world_bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut iter = self.markers.values().map(|m| m.position.to_world());
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pos(lat: f64, lng: f64) -> LatLng {
        LatLng::new(lat, lng).expect("gültige Testkoordinate")
    }

    fn store_with(points: &[(f64, f64)]) -> MarkerStore {
        let mut store = MarkerStore::new();
        for &(lat, lng) in points {
            store.add(pos(lat, lng)).expect("keine Duplikate im Test-Setup");
        }
        store
    }

    fn coords(store: &MarkerStore) -> Vec<(f64, f64)> {
        store
            .iter()
            .map(|m| (m.position.lat, m.position.lng))
            .collect()
    }

    #[test]
    fn test_add_selects_new_marker() {
        let mut store = MarkerStore::new();
        let a = store.add(pos(1.0, 1.0)).unwrap();
        assert_eq!(store.selected_id(), Some(a));

        let b = store.add(pos(2.0, 2.0)).unwrap();
        assert_eq!(store.selected_id(), Some(b));
        assert_eq!(store.len(), 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_duplicate_is_noop_and_keeps_selection() {
        let mut store = store_with(&[(1.0, 1.0), (2.0, 2.0)]);
        let first = store.get_index(0).unwrap().id;
        store.select(first);

        assert_eq!(store.add(pos(2.0, 2.0)), None);
        assert_eq!(store.len(), 2);
        assert_eq!(store.selected_id(), Some(first));
        assert_eq!(coords(&store), vec![(1.0, 1.0), (2.0, 2.0)]);
    }

    #[test]
    fn test_select_next_scenario_stops_at_end() {
        let mut store = store_with(&[(1.0, 1.0), (2.0, 2.0)]);
        store.set_selected_text("b".to_string()).unwrap();
        let first = store.get_index(0).unwrap().id;
        store.select(first);
        store.set_selected_text("a".to_string()).unwrap();

        assert!(store.select_next());
        let sel = store.selected().unwrap();
        assert_eq!((sel.position.lat, sel.position.lng), (2.0, 2.0));
        assert_eq!(sel.text_annotation.as_deref(), Some("b"));

        assert!(!store.select_next());
        let sel = store.selected().unwrap();
        assert_eq!((sel.position.lat, sel.position.lng), (2.0, 2.0));
    }

    #[test]
    fn test_select_previous_stops_at_start() {
        let mut store = store_with(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        assert!(store.select_previous());
        assert!(store.select_previous());
        assert_eq!(store.position_of_selected(), Some(0));
        assert!(!store.select_previous());
        assert_eq!(store.position_of_selected(), Some(0));
    }

    #[test]
    fn test_navigation_without_selection_is_noop() {
        let mut store = store_with(&[(1.0, 1.0), (2.0, 2.0)]);
        store.clear_selection();
        assert!(!store.select_next());
        assert!(!store.select_previous());
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut store = store_with(&[(1.0, 1.0)]);
        let current = store.selected_id();
        assert!(!store.select(MarkerId(999)));
        assert_eq!(store.selected_id(), current);
    }

    #[test]
    fn test_remove_selected_keeps_relative_order() {
        let mut store = store_with(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
        let second = store.get_index(1).unwrap().id;
        store.select(second);

        let removed = store.remove_selected().expect("Marker sollte entfernt werden");
        assert_eq!(removed.id, second);
        assert_eq!(coords(&store), vec![(1.0, 1.0), (3.0, 3.0), (4.0, 4.0)]);
        assert_eq!(store.selected_id(), None);
        assert_eq!(store.find_position(second), None);
    }

    #[test]
    fn test_remove_without_selection_is_noop() {
        let mut store = store_with(&[(1.0, 1.0)]);
        store.clear_selection();
        assert!(store.remove_selected().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_text_without_selection_fails() {
        let mut store = store_with(&[(1.0, 1.0)]);
        store.clear_selection();
        assert_eq!(
            store.set_selected_text("x".to_string()),
            Err(MarkerStoreError::NoSelection)
        );
        assert_eq!(store.get_index(0).unwrap().text_annotation, None);
    }

    #[test]
    fn test_set_text_touches_only_selected_marker() {
        let mut store = store_with(&[(1.0, 1.0), (2.0, 2.0)]);
        store.set_selected_text("Brücke".to_string()).unwrap();
        assert_eq!(store.get_index(0).unwrap().text_annotation, None);
        assert_eq!(
            store.get_index(1).unwrap().text_annotation.as_deref(),
            Some("Brücke")
        );
    }

    #[test]
    fn test_order_parameter_on_append() {
        let store = store_with(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let orders: Vec<f64> = store.iter().map(|m| m.order_parameter).collect();
        assert_eq!(orders, vec![0.0, 100.0, 200.0]);
    }

    #[test]
    fn test_insert_relative_uses_midpoint_and_ends() {
        let mut store = store_with(&[(1.0, 1.0), (2.0, 2.0)]);
        let first = store.get_index(0).unwrap().id;

        // Zwischen 0.0 und 100.0
        store.select(first);
        let mid = store.insert_relative(pos(1.5, 1.5), InsertSide::After).unwrap();
        assert_eq!(store.find_position(mid), Some(1));
        assert_relative_eq!(store.get(mid).unwrap().order_parameter, 50.0);
        assert_eq!(store.selected_id(), Some(mid));

        // Vor dem ersten Element
        store.select(first);
        let head = store.insert_relative(pos(0.5, 0.5), InsertSide::Before).unwrap();
        assert_eq!(store.find_position(head), Some(0));
        assert_relative_eq!(store.get(head).unwrap().order_parameter, -100.0);

        // Hinter dem letzten Element
        let last = store.get_index(store.len() - 1).unwrap().id;
        store.select(last);
        let tail = store.insert_relative(pos(3.0, 3.0), InsertSide::After).unwrap();
        assert_relative_eq!(store.get(tail).unwrap().order_parameter, 200.0);

        assert_eq!(
            coords(&store),
            vec![(0.5, 0.5), (1.0, 1.0), (1.5, 1.5), (2.0, 2.0), (3.0, 3.0)]
        );
    }

    #[test]
    fn test_insert_relative_rejects_duplicate() {
        let mut store = store_with(&[(1.0, 1.0), (2.0, 2.0)]);
        let selected = store.selected_id();
        assert_eq!(
            store.insert_relative(pos(1.0, 1.0), InsertSide::Before),
            None
        );
        assert_eq!(store.len(), 2);
        assert_eq!(store.selected_id(), selected);
    }

    #[test]
    fn test_nearest_within_picks_closest() {
        let store = store_with(&[(0.0, 0.0), (0.0, 1.0)]);
        let second = store.get_index(1).unwrap().id;

        // 1° == 100 Welteinheiten
        let hit = store.nearest_within(Vec2::new(90.0, 0.0), 20.0);
        assert_eq!(hit, Some(second));
        assert_eq!(store.nearest_within(Vec2::new(50.0, 0.0), 20.0), None);
    }

    #[test]
    fn test_world_bounds() {
        let store = store_with(&[(10.0, -5.0), (-10.0, 5.0)]);
        let (min, max) = store.world_bounds().unwrap();
        assert_relative_eq!(min.x, -500.0);
        assert_relative_eq!(max.x, 500.0);
        assert_relative_eq!(min.y, -1000.0);
        assert_relative_eq!(max.y, 1000.0);
        assert!(MarkerStore::new().world_bounds().is_none());
    }
}
