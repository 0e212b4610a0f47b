//! # Document Verification Sub-machine
//!
//! Each uploaded document carries its own approval state, reviewed
//! independently by an administrator:
//!
//! ```text
//! PENDING ──▶ APPROVED
//!    │
//!    └──────▶ REJECTED ──(re-upload)──▶ PENDING
//! ```
//!
//! Re-upload replaces the stored file reference, resets the document to
//! `PENDING`, and clears the prior rejection reason; sibling documents are
//! untouched. The aggregate verification status is recomputed by the
//! onboarding machine, not here.

use serde::{Deserialize, Serialize};

use fixnet_core::{EngineError, Timestamp};

/// The enumerated document types the marketplace collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Government-issued identity proof.
    IdProof,
    /// Proof of residential address.
    AddressProof,
    /// Trade or professional license.
    TradeLicense,
}

impl DocumentType {
    /// Every type a technician must have approved before verification.
    pub const REQUIRED: [DocumentType; 3] = [
        DocumentType::IdProof,
        DocumentType::AddressProof,
        DocumentType::TradeLicense,
    ];

    /// String value for serialization and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdProof => "id_proof",
            Self::AddressProof => "address_proof",
            Self::TradeLicense => "trade_license",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-document approval state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    /// Awaiting administrator review.
    Pending,
    /// Accepted by an administrator.
    Approved,
    /// Rejected with a reason; re-upload resets to Pending.
    Rejected,
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        };
        f.write_str(s)
    }
}

/// An administrator's verdict on a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewDecision {
    /// Accept the document.
    Approve,
    /// Reject the document with a reason shown to the technician.
    Reject {
        /// Why the document was rejected.
        reason: String,
    },
}

/// One verification document. At most one per type per technician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The document's type.
    pub doc_type: DocumentType,
    /// Current approval state.
    pub status: DocumentStatus,
    /// Reason for the most recent rejection, if any.
    pub rejection_reason: Option<String>,
    /// Durable URL of the uploaded file. The engine never stores raw bytes.
    pub file_url: String,
    /// When the current file was uploaded.
    pub uploaded_at: Timestamp,
}

impl Document {
    /// Create a pending document for a fresh upload.
    pub fn new(doc_type: DocumentType, file_url: impl Into<String>) -> Self {
        Self {
            doc_type,
            status: DocumentStatus::Pending,
            rejection_reason: None,
            file_url: file_url.into(),
            uploaded_at: Timestamp::now(),
        }
    }

    /// Replace the stored file: status returns to `PENDING` and the prior
    /// rejection reason is cleared.
    pub fn replace_upload(&mut self, file_url: impl Into<String>) {
        self.file_url = file_url.into();
        self.status = DocumentStatus::Pending;
        self.rejection_reason = None;
        self.uploaded_at = Timestamp::now();
    }

    /// Apply an administrator review verdict.
    ///
    /// Re-review of an already-decided document is allowed — administrators
    /// may re-evaluate after a sibling changes.
    ///
    /// # Errors
    ///
    /// [`EngineError::Validation`] when a rejection carries an empty reason.
    pub fn review(&mut self, decision: ReviewDecision) -> Result<(), EngineError> {
        match decision {
            ReviewDecision::Approve => {
                self.status = DocumentStatus::Approved;
                self.rejection_reason = None;
            }
            ReviewDecision::Reject { reason } => {
                if reason.trim().is_empty() {
                    return Err(EngineError::validation(format!(
                        "rejection of {} requires a reason",
                        self.doc_type
                    )));
                }
                self.status = DocumentStatus::Rejected;
                self.rejection_reason = Some(reason);
            }
        }
        Ok(())
    }
}
