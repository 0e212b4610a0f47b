//! # ChangeRequest — Shape and Moderation Flags
//!
//! The shared request record, its kind union, and the dismiss/archive
//! moderation ledger. Status transitions live in [`crate::workflow`].

use serde::{Deserialize, Serialize};

use fixnet_core::{CategoryId, RequestId, TechnicianId, Timestamp, ZoneId};
use fixnet_onboarding::BankDetails;

/// Approval state of a change request. Transitions exactly once,
/// `PENDING → {APPROVED, REJECTED}`, by an administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    /// Awaiting administrator adjudication.
    Pending,
    /// Approved; the kind-specific effect was applied with the flip.
    Approved,
    /// Rejected; only status, comments, and resolution time changed.
    Rejected,
}

impl RequestStatus {
    /// Whether the request has been adjudicated.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        };
        f.write_str(s)
    }
}

/// Direction of a service-offering change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceAction {
    /// Start offering the category.
    Add,
    /// Stop offering the category.
    Remove,
}

/// Direction of a zone-assignment change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneAction {
    /// Request assignment to the zone.
    Add,
    /// Request removal from the zone.
    Remove,
}

/// Kind-specific payload of a change request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeRequestKind {
    /// Add or remove a service category.
    Service {
        /// Whether to add or remove.
        action: ServiceAction,
        /// The category in question.
        category_id: CategoryId,
    },
    /// Join or leave a serviceable zone.
    Zone {
        /// Whether to add or remove.
        action: ZoneAction,
        /// The zone in question. Re-validated at resolution time.
        zone_id: ZoneId,
    },
    /// Replace the stored payout account wholesale.
    Bank {
        /// The full replacement details.
        details: BankDetails,
    },
}

impl ChangeRequestKind {
    /// Short label for logs and projections.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Service { .. } => "service",
            Self::Zone { .. } => "zone",
            Self::Bank { .. } => "bank",
        }
    }
}

/// An administrator's verdict on a pending request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Approve and apply the kind-specific effect.
    Approve {
        /// Optional note shown to the technician.
        comments: Option<String>,
    },
    /// Reject without touching the profile.
    Reject {
        /// Optional note shown to the technician.
        comments: Option<String>,
    },
}

/// A post-activation mutation request awaiting (or past) adjudication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRequest {
    /// Unique request identifier.
    pub id: RequestId,
    /// The technician who filed the request.
    pub technician_id: TechnicianId,
    /// Kind-specific payload.
    pub kind: ChangeRequestKind,
    /// Approval state.
    pub status: RequestStatus,
    /// Administrator note recorded at resolution.
    pub admin_comments: Option<String>,
    /// When the request was filed.
    pub requested_at: Timestamp,
    /// When the request was adjudicated.
    pub resolved_at: Option<Timestamp>,
    /// Moderation flag: hidden from the technician's default view.
    pub is_dismissed: bool,
    /// Moderation flag: moved out of the administrator's working queue.
    pub is_archived: bool,
}

impl ChangeRequest {
    /// File a new pending request.
    pub fn new(technician_id: TechnicianId, kind: ChangeRequestKind) -> Self {
        Self {
            id: RequestId::new(),
            technician_id,
            kind,
            status: RequestStatus::Pending,
            admin_comments: None,
            requested_at: Timestamp::now(),
            resolved_at: None,
            is_dismissed: false,
            is_archived: false,
        }
    }

    /// Set the dismissed flag. Monotonic and idempotent: legal in any
    /// status, a no-op when already set, never reversed.
    pub fn dismiss(&mut self) {
        self.is_dismissed = true;
    }

    /// Set the archived flag. Monotonic and idempotent, like [`dismiss`].
    ///
    /// [`dismiss`]: ChangeRequest::dismiss
    pub fn archive(&mut self) {
        self.is_archived = true;
    }
}
