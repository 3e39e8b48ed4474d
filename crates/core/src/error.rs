//! Domain error model.

use thiserror::Error;

use crate::id::EmployeeId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures (validation, identifier
/// parsing). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A consumed record is missing a required field.
    ///
    /// Raised by the reporting layer when it encounters a malformed record;
    /// names the offending record so the failure is actionable.
    #[error("employee {id}: missing required field `{field}`")]
    MissingField {
        id: EmployeeId,
        field: &'static str,
    },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn missing_field(id: EmployeeId, field: &'static str) -> Self {
        Self::MissingField { id, field }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
