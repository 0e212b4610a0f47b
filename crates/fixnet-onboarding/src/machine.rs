//! # Onboarding State Machine
//!
//! Step submissions, administrator document review, and the aggregation
//! rule that derives the overall verification status.
//!
//! ## Transition rule
//!
//! `advance(step, payload)` succeeds only if the payload passes structural
//! validation **and** either `current_step == step - 1` (the step advances)
//! or `step <= current_step` (a completed step is resubmitted to correct
//! data, without advancing). No skipping in either direction; a failed
//! attempt leaves the profile untouched.
//!
//! ## Aggregation rule
//!
//! Recomputed after every mutating operation:
//!
//! - an administrator rejection (`REJECTED`) is sticky until the technician
//!   successfully resubmits a step, which clears the rejection reason;
//! - otherwise `VERIFIED` iff all six steps are complete and every required
//!   document type is `APPROVED`;
//! - otherwise `VERIFICATION_PENDING` once all steps are complete;
//! - otherwise `PENDING`.
//!
//! The iff above holds at all times — a re-uploaded document (back to
//! `PENDING`) immediately drops a `VERIFIED` profile to
//! `VERIFICATION_PENDING` until an administrator re-evaluates.

use fixnet_core::EngineError;
use fixnet_geo::ZoneIndex;

use crate::document::{Document, DocumentStatus, DocumentType, ReviewDecision};
use crate::profile::{TechnicianProfile, VerificationStatus};
use crate::steps::{StepPayload, FINAL_STEP};

impl TechnicianProfile {
    /// Submit one onboarding step.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Validation`] — step out of range, payload variant
    ///   mismatched with `step`, or structural validation failure.
    /// - [`EngineError::InvalidStateTransition`] — step submitted out of
    ///   order.
    /// - [`EngineError::UnservicableZone`] — a zone id in the zone step does
    ///   not resolve to an active zone.
    pub fn advance(
        &mut self,
        step: u8,
        payload: StepPayload,
        zones: &ZoneIndex,
    ) -> Result<(), EngineError> {
        if !(1..=FINAL_STEP).contains(&step) {
            return Err(EngineError::validation(format!(
                "step {step} is out of range 1..={FINAL_STEP}"
            )));
        }

        let current = self.onboarding_step;
        let advancing = step == current + 1;
        let resubmission = step <= current;
        if !advancing && !resubmission {
            return Err(EngineError::InvalidStateTransition {
                technician_id: self.id.to_string(),
                from: format!("STEP_{current}"),
                attempted: format!("STEP_{step}"),
            });
        }

        if payload.step() != step {
            return Err(EngineError::validation(format!(
                "payload belongs to step {}, submitted as step {step}",
                payload.step()
            )));
        }
        payload.validate(zones)?;

        self.apply_payload(payload);
        if advancing {
            self.onboarding_step = step;
        }

        // A successful (re)submission after an administrator rejection
        // clears the global reason and re-enters the aggregation rule.
        if self.verification_status == VerificationStatus::Rejected {
            self.global_rejection_reason = None;
            self.verification_status = VerificationStatus::Pending;
        }

        self.recompute_verification();
        Ok(())
    }

    /// Apply an administrator verdict to one document, then re-run the
    /// aggregation rule.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotFound`] — no document of this type uploaded.
    /// - [`EngineError::Validation`] — rejection with an empty reason.
    pub fn review_document(
        &mut self,
        doc_type: DocumentType,
        decision: ReviewDecision,
    ) -> Result<(), EngineError> {
        let id = self.id;
        let doc = self
            .documents
            .iter_mut()
            .find(|d| d.doc_type == doc_type)
            .ok_or_else(|| EngineError::not_found(format!("document {doc_type} for {id}")))?;
        doc.review(decision)?;
        self.recompute_verification();
        Ok(())
    }

    /// Administrator rejection of the whole profile with a global reason.
    ///
    /// Not terminal: the technician may resubmit the affected steps, which
    /// clears the reason and re-enters `VERIFICATION_PENDING` once all
    /// steps are complete again.
    pub fn reject(&mut self, reason: impl Into<String>) -> Result<(), EngineError> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(EngineError::validation(
                "profile rejection requires a reason",
            ));
        }
        self.verification_status = VerificationStatus::Rejected;
        self.global_rejection_reason = Some(reason);
        Ok(())
    }

    /// Re-derive the aggregate verification status from step completion and
    /// document states. Called after every mutating operation.
    pub fn recompute_verification(&mut self) {
        if self.verification_status == VerificationStatus::Rejected {
            return;
        }
        if self.onboarding_step < FINAL_STEP {
            self.verification_status = VerificationStatus::Pending;
            return;
        }
        let all_required_approved = DocumentType::REQUIRED.iter().all(|t| {
            self.documents
                .iter()
                .any(|d| d.doc_type == *t && d.status == DocumentStatus::Approved)
        });
        self.verification_status = if all_required_approved {
            VerificationStatus::Verified
        } else {
            VerificationStatus::VerificationPending
        };
    }

    /// Merge a validated payload into the profile.
    fn apply_payload(&mut self, payload: StepPayload) {
        match payload {
            StepPayload::PersonalDetails {
                full_name,
                phone,
                email,
            } => {
                self.full_name = full_name;
                self.phone = phone;
                self.email = email;
            }
            StepPayload::ServiceSelection { category_ids } => {
                self.category_ids = category_ids.into_iter().collect();
            }
            StepPayload::Location { point, address } => {
                self.declared_location = Some(point);
                self.address = address;
            }
            StepPayload::ZoneSelection { zone_ids } => {
                self.zone_ids = zone_ids.into_iter().collect();
            }
            StepPayload::Bank { details } => {
                // Wholesale replacement; bank records are never merged.
                self.bank = Some(details);
            }
            StepPayload::Documents { uploads } => {
                for upload in uploads {
                    match self
                        .documents
                        .iter_mut()
                        .find(|d| d.doc_type == upload.doc_type)
                    {
                        Some(doc) => doc.replace_upload(upload.file_url),
                        None => self
                            .documents
                            .push(Document::new(upload.doc_type, upload.file_url)),
                    }
                }
            }
        }
    }
}
