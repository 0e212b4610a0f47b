//! # Engine Configuration
//!
//! Deserializable configuration for deployments. Kept deliberately small:
//! the administrator roster is the only deployment-variable input the core
//! engine needs; everything else is code.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Deployment configuration for the lifecycle engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Administrator account ids allowed to perform gated operations.
    #[serde(default)]
    pub admin_ids: BTreeSet<String>,
}

impl EngineConfig {
    /// Build a config from an iterator of administrator ids.
    pub fn with_admins<I, S>(admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            admin_ids: admins.into_iter().map(Into::into).collect(),
        }
    }
}
