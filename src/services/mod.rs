pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod celebrities;
pub mod enquiries;
pub mod errors;
pub mod import_export;

/// Proof that the caller may use back-office operations.
///
/// Only [`OperatorAccess::verify`] hands one out: a token must be configured
/// and the presented one must match it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorAccess(());

impl OperatorAccess {
    pub fn verify(presented: Option<&str>, expected: &str) -> ServiceResult<Self> {
        match presented {
            Some(token) if !expected.is_empty() && token == expected => Ok(Self(())),
            _ => Err(ServiceError::Unauthorized),
        }
    }
}
