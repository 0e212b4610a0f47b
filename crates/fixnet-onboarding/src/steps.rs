//! # Step Payloads — Structural Validation per Onboarding Step
//!
//! Each of the six data-collection steps carries a tagged payload. A
//! payload validates its own structure; the zone-selection step also needs
//! the zone index, since every submitted id must currently resolve to an
//! active zone.

use serde::{Deserialize, Serialize};

use fixnet_core::{CategoryId, EngineError, ZoneId};
use fixnet_geo::{GeoPoint, ZoneIndex};

use crate::document::DocumentType;
use crate::profile::BankDetails;

/// The last onboarding step (document upload).
pub const FINAL_STEP: u8 = 6;

/// A single document upload reference within the document step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUpload {
    /// Which required document this file is for.
    pub doc_type: DocumentType,
    /// Durable URL produced by the file resolver.
    pub file_url: String,
}

/// Tagged payload for one onboarding step submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepPayload {
    /// Step 1 — identity and contact details.
    PersonalDetails {
        /// Full legal name.
        full_name: String,
        /// Contact phone.
        phone: String,
        /// Optional contact email.
        email: Option<String>,
    },
    /// Step 2 — service categories offered.
    ServiceSelection {
        /// Categories the technician offers. Must be non-empty.
        category_ids: Vec<CategoryId>,
    },
    /// Step 3 — declared operating location.
    Location {
        /// Geographic point of the technician's base.
        point: GeoPoint,
        /// Street address matching the point.
        address: String,
    },
    /// Step 4 — serviceable zone selection.
    ZoneSelection {
        /// Zone ids chosen from the map. Each must resolve to an active
        /// zone at submission time.
        zone_ids: Vec<ZoneId>,
    },
    /// Step 5 — payout account.
    Bank {
        /// Full replacement bank details.
        details: BankDetails,
    },
    /// Step 6 — verification document upload.
    Documents {
        /// One upload per document type.
        uploads: Vec<DocumentUpload>,
    },
}

impl StepPayload {
    /// The step number this payload belongs to.
    pub fn step(&self) -> u8 {
        match self {
            Self::PersonalDetails { .. } => 1,
            Self::ServiceSelection { .. } => 2,
            Self::Location { .. } => 3,
            Self::ZoneSelection { .. } => 4,
            Self::Bank { .. } => 5,
            Self::Documents { .. } => 6,
        }
    }

    /// Structural validation. Leaves no trace on failure — the machine only
    /// merges a payload that validated in full.
    pub fn validate(&self, zones: &ZoneIndex) -> Result<(), EngineError> {
        match self {
            Self::PersonalDetails {
                full_name,
                phone,
                email,
            } => {
                require_non_empty("full_name", full_name)?;
                require_non_empty("phone", phone)?;
                if let Some(email) = email {
                    if !email.contains('@') {
                        return Err(EngineError::validation(format!(
                            "email {email:?} is not a valid address"
                        )));
                    }
                }
                Ok(())
            }
            Self::ServiceSelection { category_ids } => {
                if category_ids.is_empty() {
                    return Err(EngineError::validation(
                        "service selection requires at least one category",
                    ));
                }
                for id in category_ids {
                    require_non_empty("category_id", id.as_str())?;
                }
                Ok(())
            }
            Self::Location { point, address } => {
                require_non_empty("address", address)?;
                if !(-90.0..=90.0).contains(&point.lat) || !(-180.0..=180.0).contains(&point.lng) {
                    return Err(EngineError::validation(format!(
                        "location ({}, {}) is outside valid coordinate ranges",
                        point.lat, point.lng
                    )));
                }
                Ok(())
            }
            Self::ZoneSelection { zone_ids } => {
                if zone_ids.is_empty() {
                    return Err(EngineError::validation(
                        "zone selection requires at least one zone",
                    ));
                }
                for id in zone_ids {
                    if !zones.is_serviceable(id) {
                        return Err(EngineError::UnservicableZone {
                            zone_id: id.to_string(),
                        });
                    }
                }
                Ok(())
            }
            Self::Bank { details } => {
                require_non_empty("account_holder", &details.account_holder)?;
                require_non_empty("account_number", &details.account_number)?;
                require_non_empty("bank_name", &details.bank_name)?;
                require_non_empty("branch_code", &details.branch_code)?;
                Ok(())
            }
            Self::Documents { uploads } => {
                if uploads.is_empty() {
                    return Err(EngineError::validation(
                        "document step requires at least one upload",
                    ));
                }
                for (i, upload) in uploads.iter().enumerate() {
                    require_non_empty("file_url", &upload.file_url)?;
                    if uploads[..i].iter().any(|u| u.doc_type == upload.doc_type) {
                        return Err(EngineError::validation(format!(
                            "duplicate upload for document type {}",
                            upload.doc_type
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), EngineError> {
    if value.trim().is_empty() {
        return Err(EngineError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}
