//! # fixnet-geo — GeoZone Index
//!
//! Geographic primitives and the zone registry consulted during technician
//! onboarding (zone-step validation) and change-request resolution
//! (zone-reassignment re-validation).
//!
//! ## Modules
//!
//! - **Geometry** (`geometry.rs`): `GeoPoint` and `Polygon` with a pure
//!   ray-casting containment predicate. Boundary points count as contained —
//!   a technician standing exactly on a zone border must not fall into an
//!   unserviceable gap. Ingestion rejects degenerate rings (fewer than three
//!   vertices, zero-length edges, zero-area spikes, self-intersection).
//!
//! - **Zone** (`zone.rs`): a polygon with identity, display name, and an
//!   activity flag. The activity filter is composed by callers on top of
//!   the geometric predicate, never baked into it.
//!
//! - **Index** (`index.rs`): [`ZoneIndex`], safe for unlimited concurrent
//!   readers; mutations are serialized against each other. Zone edits are
//!   rare administrative acts, so readers may observe either the pre- or
//!   post-mutation zone set.

pub mod geometry;
pub mod index;
pub mod zone;

pub use geometry::{GeoError, GeoPoint, Polygon};
pub use index::ZoneIndex;
pub use zone::Zone;
