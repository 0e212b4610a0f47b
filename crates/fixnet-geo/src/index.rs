//! # ZoneIndex — Concurrent Zone Registry
//!
//! Holds every zone and answers the two queries the lifecycle engine needs:
//! which active zones contain a point, and the full list for map-based
//! manual selection.
//!
//! ## Concurrency
//!
//! Reads take a shared lock (unlimited concurrent readers). Mutations take
//! the exclusive lock, serializing administrator edits against each other;
//! a reader observes either the pre- or post-mutation zone set. Zone edits
//! are rare administrative acts, so eventual consistency is acceptable —
//! in-flight onboarding holding a since-deactivated zone id is not
//! retroactively invalidated.

use std::sync::{PoisonError, RwLock};

use fixnet_core::ZoneId;

use crate::geometry::{GeoError, GeoPoint};
use crate::zone::Zone;

/// Registry of zone polygons, ordered by insertion.
#[derive(Debug, Default)]
pub struct ZoneIndex {
    zones: RwLock<Vec<Zone>>,
}

impl ZoneIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a zone, or replace an existing zone with the same id.
    ///
    /// Replacement keeps the zone's original insertion position so
    /// containment-query tie-breaking stays stable across edits.
    pub fn upsert_zone(&self, zone: Zone) {
        let mut zones = self.zones.write().unwrap_or_else(PoisonError::into_inner);
        match zones.iter_mut().find(|z| z.id == zone.id) {
            Some(existing) => *existing = zone,
            None => zones.push(zone),
        }
    }

    /// Mark a zone inactive. Takes effect for all subsequent queries.
    ///
    /// # Errors
    ///
    /// [`GeoError::UnknownZone`] if no zone has this id.
    pub fn deactivate_zone(&self, id: &ZoneId) -> Result<(), GeoError> {
        let mut zones = self.zones.write().unwrap_or_else(PoisonError::into_inner);
        match zones.iter_mut().find(|z| &z.id == id) {
            Some(zone) => {
                zone.is_active = false;
                Ok(())
            }
            None => Err(GeoError::UnknownZone {
                zone_id: id.to_string(),
            }),
        }
    }

    /// All **active** zones whose ring contains the point, in insertion
    /// order. An empty result is not an error — callers fall back to
    /// manual zone selection.
    pub fn find_containing(&self, point: GeoPoint) -> Vec<Zone> {
        let zones = self.zones.read().unwrap_or_else(PoisonError::into_inner);
        zones
            .iter()
            .filter(|z| z.is_active && z.contains(point))
            .cloned()
            .collect()
    }

    /// Every zone, active or not, for map-based manual selection.
    pub fn list_all(&self) -> Vec<Zone> {
        let zones = self.zones.read().unwrap_or_else(PoisonError::into_inner);
        zones.clone()
    }

    /// Look up a single zone by id.
    pub fn get(&self, id: &ZoneId) -> Option<Zone> {
        let zones = self.zones.read().unwrap_or_else(PoisonError::into_inner);
        zones.iter().find(|z| &z.id == id).cloned()
    }

    /// Whether the zone exists and is currently active.
    pub fn is_serviceable(&self, id: &ZoneId) -> bool {
        let zones = self.zones.read().unwrap_or_else(PoisonError::into_inner);
        zones.iter().any(|z| &z.id == id && z.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;

    fn square(origin_lat: f64, origin_lng: f64, side: f64) -> Polygon {
        Polygon::new(vec![
            GeoPoint::new(origin_lat, origin_lng),
            GeoPoint::new(origin_lat, origin_lng + side),
            GeoPoint::new(origin_lat + side, origin_lng + side),
            GeoPoint::new(origin_lat + side, origin_lng),
        ])
        .unwrap()
    }

    fn index_with_two_overlapping_zones() -> ZoneIndex {
        let index = ZoneIndex::new();
        index.upsert_zone(Zone::new(ZoneId::new("z1"), "Zone 1", square(0.0, 0.0, 2.0)));
        index.upsert_zone(Zone::new(ZoneId::new("z2"), "Zone 2", square(1.0, 1.0, 2.0)));
        index
    }

    #[test]
    fn test_find_containing_insertion_order() {
        let index = index_with_two_overlapping_zones();
        // (1.5, 1.5) sits in the overlap of both squares.
        let hits = index.find_containing(GeoPoint::new(1.5, 1.5));
        let ids: Vec<&str> = hits.iter().map(|z| z.id.as_str()).collect();
        assert_eq!(ids, vec!["z1", "z2"]);
    }

    #[test]
    fn test_find_containing_skips_inactive() {
        let index = index_with_two_overlapping_zones();
        index.deactivate_zone(&ZoneId::new("z1")).unwrap();
        let hits = index.find_containing(GeoPoint::new(0.5, 0.5));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_find_containing_outside_all_is_empty_not_error() {
        let index = index_with_two_overlapping_zones();
        assert!(index.find_containing(GeoPoint::new(50.0, 50.0)).is_empty());
    }

    #[test]
    fn test_list_all_includes_inactive() {
        let index = index_with_two_overlapping_zones();
        index.deactivate_zone(&ZoneId::new("z2")).unwrap();
        assert_eq!(index.list_all().len(), 2);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let index = index_with_two_overlapping_zones();
        index.upsert_zone(Zone::new(
            ZoneId::new("z1"),
            "Zone 1 (redrawn)",
            square(10.0, 10.0, 1.0),
        ));
        let all = index.list_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, ZoneId::new("z1"));
        assert_eq!(all[0].name, "Zone 1 (redrawn)");
        // New geometry is live immediately.
        assert!(index.find_containing(GeoPoint::new(10.5, 10.5)).len() == 1);
    }

    #[test]
    fn test_deactivate_unknown_zone() {
        let index = ZoneIndex::new();
        let err = index.deactivate_zone(&ZoneId::new("missing")).unwrap_err();
        assert_eq!(
            err,
            GeoError::UnknownZone {
                zone_id: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_is_serviceable() {
        let index = index_with_two_overlapping_zones();
        assert!(index.is_serviceable(&ZoneId::new("z1")));
        index.deactivate_zone(&ZoneId::new("z1")).unwrap();
        assert!(!index.is_serviceable(&ZoneId::new("z1")));
        assert!(!index.is_serviceable(&ZoneId::new("nope")));
    }

    #[test]
    fn test_concurrent_readers_during_mutation() {
        use std::sync::Arc;
        use std::thread;

        let index = Arc::new(index_with_two_overlapping_zones());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let idx = Arc::clone(&index);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    // Readers see either the pre- or post-mutation set.
                    let hits = idx.find_containing(GeoPoint::new(0.5, 0.5));
                    assert!(hits.len() <= 1);
                }
            }));
        }
        index.deactivate_zone(&ZoneId::new("z1")).unwrap();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
