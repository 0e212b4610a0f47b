//! # fixnet-onboarding — Technician Onboarding State Machines
//!
//! Drives a technician from registration through verification.
//!
//! ## State Machines
//!
//! - **Onboarding** (`machine.rs`): six ordered data-collection steps after
//!   registration.
//!
//!   ```text
//!   STEP_0 ─▶ STEP_1 ─▶ STEP_2 ─▶ STEP_3 ─▶ STEP_4 ─▶ STEP_5 ─▶ STEP_6
//!   (register) (personal) (services) (location) (zones)  (bank)  (documents)
//!                                                                    │
//!                                                                    ▼
//!                                                        VERIFICATION_PENDING
//!                                                           │           │
//!                                                           ▼           ▼
//!                                                        VERIFIED    REJECTED
//!                                                                  (resubmittable)
//!   ```
//!
//!   Steps advance strictly in order; a completed step may be resubmitted
//!   to correct data without advancing further. `REJECTED` is not terminal —
//!   resubmission clears the rejection reason and re-enters
//!   `VERIFICATION_PENDING` once all steps are complete again.
//!
//! - **Document verification** (`document.rs`): each document type moves
//!   `PENDING → {APPROVED, REJECTED}` independently under administrator
//!   review. The aggregation rule in `machine.rs` recomputes the overall
//!   verification status after every mutation: `VERIFIED` holds iff all six
//!   steps are complete and every required type is approved.
//!
//! ## Design Decision
//!
//! Steps are a validated `u8` position plus a tagged payload enum rather
//! than seven typestate types. The invariant (step N requires step N-1) is
//! a single comparison, and profiles round-trip through storage, which a
//! typestate encoding would complicate without proportional safety benefit.

pub mod document;
pub mod machine;
pub mod profile;
pub mod steps;

// ─── Profile re-exports ─────────────────────────────────────────────

pub use profile::{BankDetails, Registration, TechnicianProfile, VerificationStatus};

// ─── Step re-exports ────────────────────────────────────────────────

pub use steps::{DocumentUpload, StepPayload, FINAL_STEP};

// ─── Document re-exports ────────────────────────────────────────────

pub use document::{Document, DocumentStatus, DocumentType, ReviewDecision};
