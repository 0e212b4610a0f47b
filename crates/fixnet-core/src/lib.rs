//! # fixnet-core — Foundational Types for the Fixnet Lifecycle Engine
//!
//! This crate is the bedrock of the Fixnet technician marketplace. It defines
//! the type-system primitives shared by every other crate in the workspace;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `TechnicianId`,
//!    `RequestId`, `ZoneId`, `CategoryId` — no bare strings or UUIDs for
//!    identifiers, so a zone id can never be passed where a category id is
//!    expected.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so the same instant always renders to
//!    the same string regardless of the host timezone.
//!
//! 3. **Explicit administrator context.** Every administrator-gated
//!    operation takes an [`AdminContext`] parameter. There is no ambient
//!    "current session" anywhere in the engine.
//!
//! 4. **One error taxonomy.** [`EngineError`] covers every failure mode the
//!    engine can surface, each variant carrying enough context (technician
//!    id, attempted transition, current state) to render a precise message.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `fixnet-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod actor;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use actor::AdminContext;
pub use error::EngineError;
pub use identity::{CategoryId, RequestId, TechnicianId, ZoneId};
pub use temporal::Timestamp;
