//! # TechnicianProfile — The Onboarding Aggregate
//!
//! The profile is the unit of mutual exclusion for onboarding, document
//! review, and change-request effects. It is created at registration
//! (step 0) and mutated exclusively by the onboarding/verification machines
//! and by approved change requests. Profiles are never deleted, only
//! deactivated.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use fixnet_core::{CategoryId, TechnicianId, Timestamp, ZoneId};
use fixnet_geo::GeoPoint;

use crate::document::Document;

/// Aggregate verification state derived from step completion and document
/// review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Onboarding steps are still being collected.
    Pending,
    /// All steps submitted; awaiting document approval.
    VerificationPending,
    /// Every required document approved and all steps complete.
    Verified,
    /// Rejected by an administrator with a global reason. Not terminal —
    /// resubmission of the affected steps clears it.
    Rejected,
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::VerificationPending => "VERIFICATION_PENDING",
            Self::Verified => "VERIFIED",
            Self::Rejected => "REJECTED",
        };
        f.write_str(s)
    }
}

/// Payout account details, replaced wholesale — never merged field by
/// field, so a record can never hold half of one account and half of
/// another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    /// Name on the account.
    pub account_holder: String,
    /// Account or IBAN number.
    pub account_number: String,
    /// Bank name.
    pub bank_name: String,
    /// Branch or routing code.
    pub branch_code: String,
}

/// The minimal data captured at registration (step 0). Credential issuance
/// (OTP, passwords) happens outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Contact phone the technician registered with.
    pub phone: String,
}

/// A technician's profile, documents, and onboarding position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicianProfile {
    /// Unique profile identifier.
    pub id: TechnicianId,
    /// Full legal name (collected at step 1).
    pub full_name: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email, if provided.
    pub email: Option<String>,
    /// Declared operating location (collected at step 3).
    pub declared_location: Option<GeoPoint>,
    /// Street address matching the declared location.
    pub address: String,
    /// Highest completed onboarding step, 0..=6.
    pub onboarding_step: u8,
    /// Aggregate verification state.
    pub verification_status: VerificationStatus,
    /// Reason attached to an administrator rejection of the whole profile.
    pub global_rejection_reason: Option<String>,
    /// Whether the technician is currently accepting jobs.
    pub is_online: bool,
    /// Deactivation flag; profiles are never deleted.
    pub is_active: bool,
    /// Service categories the technician offers.
    pub category_ids: BTreeSet<CategoryId>,
    /// Zones the technician is assigned to.
    pub zone_ids: BTreeSet<ZoneId>,
    /// Uploaded verification documents, one per type.
    pub documents: Vec<Document>,
    /// Payout account, collected at step 5.
    pub bank: Option<BankDetails>,
    /// When the profile was registered.
    pub created_at: Timestamp,
}

impl TechnicianProfile {
    /// Create a fresh profile at step 0.
    pub fn register(registration: Registration) -> Self {
        Self {
            id: TechnicianId::new(),
            full_name: String::new(),
            phone: registration.phone,
            email: None,
            declared_location: None,
            address: String::new(),
            onboarding_step: 0,
            verification_status: VerificationStatus::Pending,
            global_rejection_reason: None,
            is_online: false,
            is_active: true,
            category_ids: BTreeSet::new(),
            zone_ids: BTreeSet::new(),
            documents: Vec::new(),
            bank: None,
            created_at: Timestamp::now(),
        }
    }

    /// Whether the technician has passed verification.
    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }

    /// Look up a document by type.
    pub fn document(&self, doc_type: crate::document::DocumentType) -> Option<&Document> {
        self.documents.iter().find(|d| d.doc_type == doc_type)
    }
}
