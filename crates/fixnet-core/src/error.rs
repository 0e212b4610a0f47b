//! # Error Types — Shared Failure Taxonomy
//!
//! Defines the error taxonomy used throughout the lifecycle engine. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - State-machine errors include the technician id, the current state, and
//!   the attempted transition so boundaries can render a precise message.
//! - No error kind is silently swallowed; every failure propagates to the
//!   caller, and a failed operation leaves stored state untouched.
//! - `Validation` failures are recoverable by correcting the payload;
//!   `ConcurrentModification` is recoverable by retrying the whole
//!   operation; the rest are surfaced without automatic retry.

use thiserror::Error;

/// Top-level error type for the lifecycle engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed or missing payload fields. Recoverable by correction.
    #[error("validation error: {0}")]
    Validation(String),

    /// Attempted step or request transition violates the state machine.
    #[error("invalid state transition for {technician_id}: {from} -> {attempted}")]
    InvalidStateTransition {
        /// The technician whose record was being mutated.
        technician_id: String,
        /// Current state (step number or request status).
        from: String,
        /// The transition that was attempted.
        attempted: String,
    },

    /// A submitted zone id does not resolve to an active zone.
    #[error("zone {zone_id} is not currently serviceable")]
    UnservicableZone {
        /// The offending zone id.
        zone_id: String,
    },

    /// A zone referenced by a pending request was deactivated before
    /// resolution. The request stays pending for re-resolution.
    #[error("zone {zone_id} was deactivated after the request was submitted")]
    StaleZoneReference {
        /// The zone id that went stale.
        zone_id: String,
    },

    /// A non-administrator attempted an administrator-only action.
    #[error("not authorized to perform {action}")]
    NotAuthorized {
        /// The action that was attempted.
        action: String,
    },

    /// A serialization conflict was detected. Retry the whole operation.
    #[error("concurrent modification of {technician_id}; retry the operation")]
    ConcurrentModification {
        /// The technician whose aggregate was contended.
        technician_id: String,
    },

    /// A referenced record does not exist.
    #[error("{what} not found")]
    NotFound {
        /// Description of the missing record.
        what: String,
    },

    /// Persistence-layer failure. Fatal for the in-flight operation.
    #[error("storage error: {0}")]
    Storage(String),
}

impl EngineError {
    /// Construct a validation error from anything displayable.
    pub fn validation(msg: impl std::fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Construct a not-found error for a record description.
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        Self::NotFound {
            what: what.to_string(),
        }
    }

    /// Whether the caller should retry the whole operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ConcurrentModification { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_error_message_carries_context() {
        let err = EngineError::InvalidStateTransition {
            technician_id: "technician:abc".to_string(),
            from: "STEP_2".to_string(),
            attempted: "STEP_5".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("technician:abc"));
        assert!(msg.contains("STEP_2"));
        assert!(msg.contains("STEP_5"));
    }

    #[test]
    fn test_only_concurrent_modification_is_retryable() {
        assert!(EngineError::ConcurrentModification {
            technician_id: "t".to_string()
        }
        .is_retryable());
        assert!(!EngineError::validation("bad").is_retryable());
        assert!(!EngineError::NotAuthorized {
            action: "resolve".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_stale_zone_message_names_the_zone() {
        let err = EngineError::StaleZoneReference {
            zone_id: "z2".to_string(),
        };
        assert!(err.to_string().contains("z2"));
    }
}
