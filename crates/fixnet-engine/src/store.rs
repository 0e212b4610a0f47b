//! # Persistence Seam — Atomic Aggregate Read-Modify-Write
//!
//! A technician's profile, documents, and change requests form one
//! aggregate: the unit of mutual exclusion and of transactional commit.
//! `update` runs a closure against a working copy and commits only on
//! `Ok` — a failed operation (validation error, stale zone, rejected
//! transition) leaves the stored aggregate byte-for-byte unchanged, which
//! is what makes resolution's effect-plus-status flip all-or-nothing.
//!
//! ## Concurrency
//!
//! [`MemoryStore`] holds aggregates in a `DashMap`; the map's per-entry
//! write lock serializes concurrent operations against the same technician
//! while operations on different technicians proceed in parallel on
//! separate shards. External implementations that cannot hold an entry
//! lock should compare the `version` field on commit and surface
//! [`EngineError::ConcurrentModification`] on mismatch.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use fixnet_core::{EngineError, RequestId, TechnicianId};
use fixnet_onboarding::TechnicianProfile;
use fixnet_workflow::ChangeRequest;

/// The persisted unit: profile, change requests, and a version counter
/// bumped on every committed mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicianAggregate {
    /// The technician's profile and documents.
    pub profile: TechnicianProfile,
    /// Every change request the technician has filed, in filing order.
    pub requests: Vec<ChangeRequest>,
    /// Commit counter for optimistic-concurrency implementations.
    pub version: u64,
}

impl TechnicianAggregate {
    /// Wrap a freshly registered profile.
    pub fn new(profile: TechnicianProfile) -> Self {
        Self {
            profile,
            requests: Vec::new(),
            version: 0,
        }
    }

    /// Count of change requests still awaiting adjudication.
    pub fn pending_request_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| !r.status.is_resolved())
            .count()
    }
}

/// Storage interface for technician aggregates.
pub trait ProfileStore {
    /// Persist a new aggregate.
    ///
    /// # Errors
    ///
    /// [`EngineError::Storage`] if the id is already present.
    fn create(&self, aggregate: TechnicianAggregate) -> Result<(), EngineError>;

    /// Read a snapshot of an aggregate.
    fn read(&self, id: &TechnicianId) -> Result<TechnicianAggregate, EngineError>;

    /// Atomically read-modify-write one aggregate.
    ///
    /// The closure runs against a working copy; the store commits (and
    /// bumps `version`) only when it returns `Ok`. Concurrent updates to
    /// the same technician are serialized.
    fn update<R>(
        &self,
        id: &TechnicianId,
        f: impl FnOnce(&mut TechnicianAggregate) -> Result<R, EngineError>,
    ) -> Result<R, EngineError>
    where
        Self: Sized;

    /// Find which technician owns a change request.
    fn find_request_owner(&self, request_id: &RequestId) -> Result<TechnicianId, EngineError>;
}

/// In-memory store backed by a sharded concurrent map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    aggregates: DashMap<TechnicianId, TechnicianAggregate>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn create(&self, aggregate: TechnicianAggregate) -> Result<(), EngineError> {
        let id = aggregate.profile.id;
        match self.aggregates.entry(id) {
            dashmap::Entry::Occupied(_) => {
                Err(EngineError::Storage(format!("{id} already registered")))
            }
            dashmap::Entry::Vacant(slot) => {
                slot.insert(aggregate);
                Ok(())
            }
        }
    }

    fn read(&self, id: &TechnicianId) -> Result<TechnicianAggregate, EngineError> {
        self.aggregates
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| EngineError::not_found(id))
    }

    fn update<R>(
        &self,
        id: &TechnicianId,
        f: impl FnOnce(&mut TechnicianAggregate) -> Result<R, EngineError>,
    ) -> Result<R, EngineError> {
        // The entry guard holds the shard lock for the duration, so
        // same-technician operations are serialized here.
        let mut entry = self
            .aggregates
            .get_mut(id)
            .ok_or_else(|| EngineError::not_found(id))?;
        let mut working = entry.clone();
        let result = f(&mut working)?;
        working.version += 1;
        *entry = working;
        Ok(result)
    }

    fn find_request_owner(&self, request_id: &RequestId) -> Result<TechnicianId, EngineError> {
        for entry in self.aggregates.iter() {
            if entry.requests.iter().any(|r| &r.id == request_id) {
                return Ok(entry.profile.id);
            }
        }
        Err(EngineError::not_found(request_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixnet_onboarding::Registration;

    fn aggregate() -> TechnicianAggregate {
        TechnicianAggregate::new(TechnicianProfile::register(Registration {
            phone: "+92-300-1234567".to_string(),
        }))
    }

    #[test]
    fn test_create_then_read() {
        let store = MemoryStore::new();
        let agg = aggregate();
        let id = agg.profile.id;
        store.create(agg.clone()).unwrap();
        assert_eq!(store.read(&id).unwrap(), agg);
    }

    #[test]
    fn test_double_create_is_storage_error() {
        let store = MemoryStore::new();
        let agg = aggregate();
        store.create(agg.clone()).unwrap();
        assert!(matches!(
            store.create(agg).unwrap_err(),
            EngineError::Storage(_)
        ));
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let store = MemoryStore::new();
        let missing = TechnicianId::new();
        assert!(matches!(
            store.read(&missing).unwrap_err(),
            EngineError::NotFound { .. }
        ));
    }

    #[test]
    fn test_update_commits_and_bumps_version() {
        let store = MemoryStore::new();
        let agg = aggregate();
        let id = agg.profile.id;
        store.create(agg).unwrap();

        store
            .update(&id, |agg| {
                agg.profile.is_online = true;
                Ok(())
            })
            .unwrap();

        let stored = store.read(&id).unwrap();
        assert!(stored.profile.is_online);
        assert_eq!(stored.version, 1);
    }

    #[test]
    fn test_failed_update_rolls_back() {
        let store = MemoryStore::new();
        let agg = aggregate();
        let id = agg.profile.id;
        store.create(agg.clone()).unwrap();

        let err = store
            .update(&id, |working| {
                working.profile.is_online = true;
                Err::<(), _>(EngineError::validation("abort"))
            })
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
        // The half-applied working copy was discarded.
        assert_eq!(store.read(&id).unwrap(), agg);
    }

    #[test]
    fn test_parallel_updates_to_different_technicians() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemoryStore::new());
        let ids: Vec<TechnicianId> = (0..4)
            .map(|_| {
                let agg = aggregate();
                let id = agg.profile.id;
                store.create(agg).unwrap();
                id
            })
            .collect();

        let handles: Vec<_> = ids
            .iter()
            .map(|id| {
                let store = Arc::clone(&store);
                let id = *id;
                thread::spawn(move || {
                    for _ in 0..50 {
                        store
                            .update(&id, |agg| {
                                agg.profile.is_online = !agg.profile.is_online;
                                Ok(())
                            })
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        for id in &ids {
            assert_eq!(store.read(id).unwrap().version, 50);
        }
    }

    #[test]
    fn test_serialized_updates_to_same_technician() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemoryStore::new());
        let agg = aggregate();
        let id = agg.profile.id;
        store.create(agg).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..25 {
                        store
                            .update(&id, |agg| {
                                agg.profile.is_online = !agg.profile.is_online;
                                Ok(())
                            })
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        // Every committed update is visible in the version counter.
        assert_eq!(store.read(&id).unwrap().version, 100);
    }
}
