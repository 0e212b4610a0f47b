//! # Zone — A Serviceable Geographic Area
//!
//! A zone couples a validated polygon with identity, a display name, and an
//! activity flag. Identity is immutable; the polygon and flag are edited by
//! administrators through the index.

use serde::{Deserialize, Serialize};

use fixnet_core::ZoneId;

use crate::geometry::{GeoPoint, Polygon};

/// A geographic zone technicians may be assigned to operate within.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Immutable zone identifier.
    pub id: ZoneId,
    /// Human-readable name shown on map selection.
    pub name: String,
    /// The zone's boundary ring.
    pub polygon: Polygon,
    /// Whether the zone currently accepts assignments. Inactive zones stay
    /// listed ("coming soon") but are not serviceable.
    pub is_active: bool,
}

impl Zone {
    /// Build an active zone.
    pub fn new(id: ZoneId, name: impl Into<String>, polygon: Polygon) -> Self {
        Self {
            id,
            name: name.into(),
            polygon,
            is_active: true,
        }
    }

    /// Whether the zone's ring contains the point (ignores activity).
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.polygon.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_zone(id: &str) -> Zone {
        let polygon = Polygon::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
        ])
        .unwrap();
        Zone::new(ZoneId::new(id), format!("Zone {id}"), polygon)
    }

    #[test]
    fn test_new_zone_is_active() {
        assert!(square_zone("z1").is_active);
    }

    #[test]
    fn test_contains_ignores_activity() {
        let mut zone = square_zone("z1");
        zone.is_active = false;
        // Geometric predicate is independent of the activity filter.
        assert!(zone.contains(GeoPoint::new(0.5, 0.5)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let zone = square_zone("z1");
        let json = serde_json::to_string(&zone).unwrap();
        let parsed: Zone = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, zone);
    }
}
