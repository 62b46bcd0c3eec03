use thiserror::Error;

use teammate_core::DomainError;

use crate::repository::RepositoryError;

/// Error returned by application services.
///
/// Domain and repository errors pass through unchanged so callers can match
/// on the precise failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A configuration step failed while composing the service.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
