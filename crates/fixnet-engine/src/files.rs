//! # File Reference Resolution Seam
//!
//! Document uploads arrive at the boundary as opaque references; a
//! collaborator turns them into durable URLs. The engine stores only the
//! URL — raw bytes never enter the aggregate.

use fixnet_core::EngineError;

/// Resolves an uploaded file reference into a durable URL.
pub trait FileResolver {
    /// Produce a durable URL for the given upload reference.
    ///
    /// # Errors
    ///
    /// [`EngineError::Validation`] when the reference cannot be resolved.
    fn durable_url(&self, upload_ref: &str) -> Result<String, EngineError>;
}

/// Resolver that accepts already-durable URLs unchanged. Used in tests and
/// in deployments where the boundary uploads before calling the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughResolver;

impl FileResolver for PassthroughResolver {
    fn durable_url(&self, upload_ref: &str) -> Result<String, EngineError> {
        if upload_ref.trim().is_empty() {
            return Err(EngineError::validation("upload reference must not be empty"));
        }
        Ok(upload_ref.to_string())
    }
}
