//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CustHubError`] via `#[from]`.

/// Top-level error for every custhub use-case.
#[derive(Debug, thiserror::Error)]
pub enum CustHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("constraint violation")]
    Conflict(#[from] ConflictError),

    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A required input field was absent or empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// No row matched the requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The store rejected a write because it would break a constraint
/// (unique phone number, foreign key to `customers`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct ConflictError {
    pub kind: ConflictKind,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Unique,
    ForeignKey,
    Other,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Unique => "unique constraint violated",
            Self::ForeignKey => "foreign key constraint violated",
            Self::Other => "constraint violated",
        })
    }
}

/// Reject `None` or empty strings for a required field.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] naming `field`.
pub fn require(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField(field)),
    }
}
