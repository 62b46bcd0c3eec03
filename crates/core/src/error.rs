//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures raised by
/// aggregate factories and mutators. Storage and composition failures belong
/// to the infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A factory was called with a missing required field.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Activation requested on an aggregate that is already active.
    #[error("{0} is already activated")]
    AlreadyActivated(&'static str),

    /// Deactivation requested on an aggregate that is already inactive.
    #[error("{0} is already deactivated")]
    AlreadyDeactivated(&'static str),

    /// An update carried a value equal to the current one.
    #[error("no change: {0}")]
    NoChange(String),

    /// The counterpart is already present in the roster mapping.
    #[error("already assigned: {0}")]
    AlreadyAssigned(String),

    /// The counterpart is absent from the roster mapping.
    #[error("not assigned: {0}")]
    NotAssigned(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn no_change(msg: impl Into<String>) -> Self {
        Self::NoChange(msg.into())
    }

    pub fn already_assigned(msg: impl Into<String>) -> Self {
        Self::AlreadyAssigned(msg.into())
    }

    pub fn not_assigned(msg: impl Into<String>) -> Self {
        Self::NotAssigned(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
