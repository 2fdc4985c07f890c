//! Storage-specific error type wrapping sqlx errors.

use sqlx::error::ErrorKind;

use custhub_domain::error::{ConflictError, ConflictKind, CustHubError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StorageError {
    /// The constraint this error violates, if the store reported one.
    fn conflict(&self) -> Option<ConflictError> {
        let Self::Database(sqlx::Error::Database(db)) = self else {
            return None;
        };
        let kind = match db.kind() {
            ErrorKind::UniqueViolation => ConflictKind::Unique,
            ErrorKind::ForeignKeyViolation => ConflictKind::ForeignKey,
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => ConflictKind::Other,
            _ => return None,
        };
        Some(ConflictError {
            kind,
            detail: db.message().to_string(),
        })
    }
}

impl From<StorageError> for CustHubError {
    fn from(err: StorageError) -> Self {
        match err.conflict() {
            Some(conflict) => Self::Conflict(conflict),
            None => Self::Storage(Box::new(err)),
        }
    }
}
