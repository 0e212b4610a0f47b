//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all domain identifiers in the lifecycle engine.
//! These prevent accidental identifier confusion — you cannot pass a
//! `ZoneId` where a `CategoryId` is expected.
//!
//! Technician and change-request ids are engine-generated UUIDs. Zone and
//! category ids are administrator-assigned slugs (e.g. `"zone-karachi-05"`,
//! `"plumbing"`) and are therefore string-backed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a technician profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TechnicianId(pub Uuid);

/// Unique identifier for a change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

/// Administrator-assigned identifier for a serviceable zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(pub String);

/// Administrator-assigned identifier for a service category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub String);

impl TechnicianId {
    /// Generate a new random technician identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TechnicianId {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestId {
    /// Generate a new random request identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneId {
    /// Wrap a zone slug.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CategoryId {
    /// Wrap a category slug.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TechnicianId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "technician:{}", self.0)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "request:{}", self.0)
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technician_ids_are_unique() {
        assert_ne!(TechnicianId::new(), TechnicianId::new());
    }

    #[test]
    fn test_display_prefixes() {
        let tid = TechnicianId::new();
        assert!(tid.to_string().starts_with("technician:"));
        let rid = RequestId::new();
        assert!(rid.to_string().starts_with("request:"));
    }

    #[test]
    fn test_zone_id_display_is_bare_slug() {
        assert_eq!(ZoneId::new("z1").to_string(), "z1");
    }

    #[test]
    fn test_slug_ids_order_lexicographically() {
        assert!(ZoneId::new("a") < ZoneId::new("b"));
        assert!(CategoryId::new("electric") < CategoryId::new("plumbing"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = TechnicianId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: TechnicianId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
