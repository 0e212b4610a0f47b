//! # fixnet-engine — Orchestration Layer
//!
//! Wires the onboarding machines, the change-request workflow, and the
//! zone index behind one synchronous facade, [`TechnicianEngine`], and
//! defines the three collaborator seams the engine consumes:
//!
//! - [`ProfileStore`] — atomic read-modify-write on a technician aggregate
//!   (profile + change requests + version) keyed by technician id. The
//!   bundled [`MemoryStore`] serializes operations per technician while
//!   different technicians proceed in parallel.
//! - [`AdminAuthorizer`] — boolean authorization gating every
//!   administrator-only operation. [`StaticRoster`] is built from
//!   [`EngineConfig`].
//! - [`FileResolver`] — turns an upload reference into a durable URL; the
//!   engine stores URLs, never raw bytes.
//!
//! The exposed operation groups are synchronous request/response calls:
//! step advancement, document review, change-request submit/resolve,
//! dismiss/archive, zone administration, and the read-only
//! [`StatusProjection`] for presentation layers.

pub mod auth;
pub mod config;
pub mod engine;
pub mod files;
pub mod projection;
pub mod store;

pub use auth::{AdminAuthorizer, StaticRoster};
pub use config::EngineConfig;
pub use engine::TechnicianEngine;
pub use files::{FileResolver, PassthroughResolver};
pub use projection::{DocumentProjection, StatusProjection};
pub use store::{MemoryStore, ProfileStore, TechnicianAggregate};
