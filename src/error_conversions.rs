//! Error conversion glue between the form, domain and service layers.
//!
//! The domain layer must not depend on service error types, so the
//! conversions live here and are only compiled with the `server` feature.

use crate::domain::types::TypeConstraintError;
use crate::forms::celebrities::AddCelebrityFormError;
use crate::forms::enquiries::EnquiryFormError;
use crate::forms::import_export::UploadParseError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<EnquiryFormError> for ServiceError {
    fn from(val: EnquiryFormError) -> Self {
        ServiceError::Validation(val.0)
    }
}

impl From<AddCelebrityFormError> for ServiceError {
    fn from(val: AddCelebrityFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UploadParseError> for ServiceError {
    fn from(val: UploadParseError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
