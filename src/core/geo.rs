//! Geografische Koordinaten und Projektion in die Editor-Welt.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Welteinheiten pro Grad (equirektangulär, 1° Länge == 1° Breite).
pub const WORLD_UNITS_PER_DEGREE: f32 = 100.0;

/// Fehler bei ungültigen Koordinaten.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Breitengrad {0} liegt ausserhalb von [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("Laengengrad {0} liegt ausserhalb von [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("Koordinate ist nicht endlich (NaN oder Infinity)")]
    NonFinite,
}

/// Geografische Position in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine geprüfte Koordinate.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Projiziert die Koordinate in Welteinheiten (Y wächst nach Süden).
    pub fn to_world(self) -> Vec2 {
        Vec2::new(
            self.lng as f32 * WORLD_UNITS_PER_DEGREE,
            -(self.lat as f32) * WORLD_UNITS_PER_DEGREE,
        )
    }

    /// Rückprojektion aus Welteinheiten.
    ///
    /// Werte ausserhalb des gültigen Bereichs werden auf die Grenzen geklemmt,
    /// damit Klicks neben der Karte trotzdem einen gültigen Marker ergeben.
    pub fn from_world(world: Vec2) -> Self {
        let lat = f64::from(-world.y / WORLD_UNITS_PER_DEGREE).clamp(-90.0, 90.0);
        let lng = f64::from(world.x / WORLD_UNITS_PER_DEGREE).clamp(-180.0, 180.0);
        Self { lat, lng }
    }

    /// Exakter Koordinatenvergleich (Duplikat-Schlüssel der Marker-Liste).
    pub fn same_coordinates(&self, other: &LatLng) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            LatLng::new(91.0, 0.0),
            Err(CoordinateError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            LatLng::new(0.0, -180.5),
            Err(CoordinateError::LongitudeOutOfRange(-180.5))
        );
        assert_eq!(LatLng::new(f64::NAN, 0.0), Err(CoordinateError::NonFinite));
        assert!(LatLng::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn test_world_projection_roundtrip() {
        let pos = LatLng::new(48.25, 11.5).unwrap();
        let world = pos.to_world();
        assert_relative_eq!(world.x, 1150.0);
        assert_relative_eq!(world.y, -4825.0);

        let back = LatLng::from_world(world);
        assert_relative_eq!(back.lat, 48.25, epsilon = 1e-4);
        assert_relative_eq!(back.lng, 11.5, epsilon = 1e-4);
    }

    #[test]
    fn test_from_world_clamps_to_valid_range() {
        let pos = LatLng::from_world(Vec2::new(1.0e6, -1.0e6));
        assert_relative_eq!(pos.lat, 90.0);
        assert_relative_eq!(pos.lng, 180.0);
    }

    #[test]
    fn test_same_coordinates_is_exact() {
        let a = LatLng { lat: 1.0, lng: 2.0 };
        let b = LatLng { lat: 1.0, lng: 2.0 };
        let c = LatLng {
            lat: 1.0 + f64::EPSILON,
            lng: 2.0,
        };
        assert!(a.same_coordinates(&b));
        assert!(!a.same_coordinates(&c));
    }
}
