//! # Administrator Context
//!
//! Administrator identity is passed explicitly into every gated call.
//! The engine never consults ambient session state; whoever sits at the
//! boundary authenticates the administrator and constructs an
//! [`AdminContext`] for the duration of one operation.

use serde::{Deserialize, Serialize};

/// Identity of the administrator performing a gated operation.
///
/// Construction does not imply authorization — the engine checks the id
/// against its `AdminAuthorizer` seam before acting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdminContext {
    /// Stable identifier of the administrator account.
    pub admin_id: String,
}

impl AdminContext {
    /// Build a context for the given administrator id.
    pub fn new(admin_id: impl Into<String>) -> Self {
        Self {
            admin_id: admin_id.into(),
        }
    }
}

impl std::fmt::Display for AdminContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "admin:{}", self.admin_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(AdminContext::new("ops-1").to_string(), "admin:ops-1");
    }
}
