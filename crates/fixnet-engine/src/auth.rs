//! # Administrator Authorization Seam
//!
//! The engine consumes a boolean authorization check; how administrators
//! authenticate is a boundary concern. [`StaticRoster`] answers from the
//! configured roster and is sufficient for tests and single-node
//! deployments.

use std::collections::BTreeSet;

use fixnet_core::AdminContext;

use crate::config::EngineConfig;

/// Boolean authorization check gating administrator-only operations.
pub trait AdminAuthorizer {
    /// Whether the context identifies a current administrator.
    fn is_admin(&self, ctx: &AdminContext) -> bool;
}

/// Roster-backed authorizer built from [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct StaticRoster {
    admins: BTreeSet<String>,
}

impl StaticRoster {
    /// Build a roster from configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            admins: config.admin_ids.clone(),
        }
    }
}

impl AdminAuthorizer for StaticRoster {
    fn is_admin(&self, ctx: &AdminContext) -> bool {
        self.admins.contains(&ctx.admin_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_membership() {
        let roster = StaticRoster::from_config(&EngineConfig::with_admins(["ops-1"]));
        assert!(roster.is_admin(&AdminContext::new("ops-1")));
        assert!(!roster.is_admin(&AdminContext::new("ops-2")));
    }

    #[test]
    fn test_empty_roster_authorizes_nobody() {
        let roster = StaticRoster::default();
        assert!(!roster.is_admin(&AdminContext::new("ops-1")));
    }
}
