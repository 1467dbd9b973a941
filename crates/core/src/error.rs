//! Domain error model.

use thiserror::Error;

use crate::validation::FieldErrors;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Nothing in this
/// layer is transient, so callers never retry on these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A supplied identifier string is not a syntactically valid UUID.
    #[error("ID must be a valid UUID: {0}")]
    InvalidIdentifier(String),

    /// One or more entity fields violated their declared rules.
    ///
    /// Always carries the full per-field breakdown, never a single combined
    /// message.
    #[error("entity validation failed: {0}")]
    EntityValidation(FieldErrors),
}

impl DomainError {
    pub fn invalid_identifier(value: impl Into<String>) -> Self {
        Self::InvalidIdentifier(value.into())
    }

    pub fn entity_validation(errors: FieldErrors) -> Self {
        Self::EntityValidation(errors)
    }

    /// Per-field messages, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::EntityValidation(errors) => Some(errors),
            Self::InvalidIdentifier(_) => None,
        }
    }
}
