use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// A uniqueness or foreign key constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// The targeted row does not exist.
    #[error("not found")]
    NotFound,
    /// A stored value failed domain validation.
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("database error: {0}")]
    Database(DieselError),
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(
                kind @ (DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation),
                info,
            ) => Self::ConstraintViolation(format!("{kind:?}: {}", info.message())),
            other => Self::Database(other),
        }
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
