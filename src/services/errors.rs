use thiserror::Error;

use crate::forms::FieldError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The caller did not present a valid operator token.
    #[error("unauthorized")]
    Unauthorized,
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The write conflicts with existing data, e.g. a duplicate slug.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Field-level validation failures to show next to each input.
    #[error("invalid input")]
    Validation(Vec<FieldError>),
    /// A submitted form could not be processed.
    #[error("form error: {0}")]
    Form(String),
    /// A value violated a domain constraint.
    #[error("type constraint violated: {0}")]
    TypeConstraint(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
