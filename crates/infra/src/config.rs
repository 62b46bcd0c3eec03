//! Configuration representation for service composition.
//!
//! Nothing here reads files or the environment; callers hand a `ServiceConfig`
//! (built in code or parsed from JSON) to the service constructors.

use serde::{Deserialize, Serialize};

use crate::services::ServiceError;

/// Which repository implementation backs a service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryBackend {
    #[default]
    InMemory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    #[serde(default)]
    pub backend: RepositoryBackend,
}

impl ServiceConfig {
    pub fn in_memory() -> Self {
        Self {
            backend: RepositoryBackend::InMemory,
        }
    }

    /// Parse a JSON document such as `{"backend": "in_memory"}`.
    pub fn from_json(raw: &str) -> Result<Self, ServiceError> {
        serde_json::from_str(raw)
            .map_err(|e| ServiceError::InvalidConfiguration(format!("service config: {e}")))
    }
}
