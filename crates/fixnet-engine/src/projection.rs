//! # Status Projection — Read-Only View for Presentation Layers
//!
//! A flat, serializable snapshot of where a technician stands: current
//! step, aggregate verification status, per-document review state, and how
//! many change requests are still awaiting adjudication.

use serde::{Deserialize, Serialize};

use fixnet_core::TechnicianId;
use fixnet_onboarding::{DocumentStatus, DocumentType, VerificationStatus};

use crate::store::TechnicianAggregate;

/// One document's review state, as shown to the technician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProjection {
    /// The document type.
    pub doc_type: DocumentType,
    /// Current review state.
    pub status: DocumentStatus,
    /// Reason for the most recent rejection, if any.
    pub rejection_reason: Option<String>,
}

/// Read-only snapshot of a technician's lifecycle position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusProjection {
    /// The technician this snapshot describes.
    pub technician_id: TechnicianId,
    /// Highest completed onboarding step.
    pub onboarding_step: u8,
    /// Aggregate verification state.
    pub verification_status: VerificationStatus,
    /// Reason attached to a global rejection, if any.
    pub global_rejection_reason: Option<String>,
    /// Review state of every uploaded document.
    pub documents: Vec<DocumentProjection>,
    /// Change requests still awaiting adjudication.
    pub pending_request_count: usize,
}

impl StatusProjection {
    /// Project an aggregate into its presentation snapshot.
    pub fn from_aggregate(aggregate: &TechnicianAggregate) -> Self {
        Self {
            technician_id: aggregate.profile.id,
            onboarding_step: aggregate.profile.onboarding_step,
            verification_status: aggregate.profile.verification_status,
            global_rejection_reason: aggregate.profile.global_rejection_reason.clone(),
            documents: aggregate
                .profile
                .documents
                .iter()
                .map(|d| DocumentProjection {
                    doc_type: d.doc_type,
                    status: d.status,
                    rejection_reason: d.rejection_reason.clone(),
                })
                .collect(),
            pending_request_count: aggregate.pending_request_count(),
        }
    }
}
