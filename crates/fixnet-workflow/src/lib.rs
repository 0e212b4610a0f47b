//! # fixnet-workflow — Change-Request Workflow
//!
//! Post-activation mutation requests flow through a single generic approval
//! pipeline, parameterized by request kind:
//!
//! ```text
//! PENDING ──▶ APPROVED (kind-specific effect applied atomically)
//!    │
//!    └──────▶ REJECTED (status, comments, resolved_at only)
//! ```
//!
//! The three kinds (service add/remove, zone reassignment, bank update) are
//! one tagged variant, not three near-duplicate flows. A resolved request
//! is immutable except for the moderation flags.
//!
//! ## Moderation ledger
//!
//! `dismiss` and `archive` are independent, monotonic visibility flags,
//! orthogonal to the approval outcome and settable in any status —
//! including still-`PENDING`, so a technician can retract visibility
//! without deleting history. Repeated invocation is a no-op, never an
//! error; no reversal operation exists.

pub mod request;
pub mod workflow;

pub use request::{
    ChangeRequest, ChangeRequestKind, RequestStatus, Resolution, ServiceAction, ZoneAction,
};
pub use workflow::{resolve, submit};
