use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::enquiry::NewEnquiry;
use crate::domain::types::{
    CelebrityId, CelebrityName, ContactNumber, EmailAddress, EnquiryPurpose, SubmitterName,
    TypeConstraintError,
};
use crate::forms::{FieldError, collect_field_errors};

pub const CONTACT_CHARACTERS_MESSAGE: &str =
    "Phone number can only contain digits, spaces, hyphens, and parentheses";
pub const CONTACT_LENGTH_MESSAGE: &str =
    "Phone number must be 10-15 digits (e.g., +91 9876543210 or 9876543210)";

/// Struct field name to client-facing name, in display order.
const FIELDS: &[(&str, &str)] = &[
    ("celebrity_id", "celebrityId"),
    ("user_name", "userName"),
    ("email", "email"),
    ("contact", "contact"),
    ("purpose", "purpose"),
];

fn validate_contact(contact: &str) -> Result<(), ValidationError> {
    match ContactNumber::new(contact) {
        Ok(_) => Ok(()),
        Err(TypeConstraintError::InvalidContactLength { .. }) => {
            Err(ValidationError::new("contact_length")
                .with_message(Cow::Borrowed(CONTACT_LENGTH_MESSAGE)))
        }
        Err(_) => Err(ValidationError::new("contact_characters")
            .with_message(Cow::Borrowed(CONTACT_CHARACTERS_MESSAGE))),
    }
}

/// Raw enquiry submission as posted by the booking form.
///
/// Missing fields deserialize as empty so that they are reported by
/// validation together with every other field error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct EnquiryForm {
    #[validate(range(min = 1, message = "Please select a celebrity"))]
    pub celebrity_id: i32,
    /// Name shown on the profile the visitor enquired from.
    pub celebrity_name: Option<String>,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub user_name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_contact"))]
    pub contact: String,
    #[validate(length(min = 10, message = "Please provide more details about your enquiry"))]
    pub purpose: String,
}

impl EnquiryForm {
    fn trimmed(self) -> Self {
        Self {
            celebrity_id: self.celebrity_id,
            celebrity_name: self
                .celebrity_name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
            user_name: self.user_name.trim().to_string(),
            email: self.email.trim().to_string(),
            contact: self.contact.trim().to_string(),
            purpose: self.purpose.trim().to_string(),
        }
    }
}

/// Enquiry whose every field passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryFormPayload {
    pub celebrity_id: CelebrityId,
    pub celebrity_name: Option<CelebrityName>,
    pub user_name: SubmitterName,
    pub email: EmailAddress,
    pub contact: ContactNumber,
    pub purpose: EnquiryPurpose,
}

impl EnquiryFormPayload {
    /// `fallback_name` is used when the submission did not carry a celebrity name.
    pub fn into_new_enquiry(self, fallback_name: CelebrityName) -> NewEnquiry {
        NewEnquiry {
            celebrity_id: self.celebrity_id,
            celebrity_name: self.celebrity_name.unwrap_or(fallback_name),
            user_name: self.user_name,
            email: self.email,
            contact: self.contact,
            purpose: self.purpose,
        }
    }
}

/// Every field-level failure of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryFormError(pub Vec<FieldError>);

impl Display for EnquiryFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fields = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>();
        write!(f, "Invalid enquiry data: {}", fields.join("; "))
    }
}

impl std::error::Error for EnquiryFormError {}

impl From<ValidationErrors> for EnquiryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self(collect_field_errors(&value, FIELDS))
    }
}

impl From<TypeConstraintError> for EnquiryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self(vec![FieldError::new("enquiry", value.to_string())])
    }
}

impl TryFrom<EnquiryForm> for EnquiryFormPayload {
    type Error = EnquiryFormError;

    fn try_from(value: EnquiryForm) -> Result<Self, Self::Error> {
        let value = value.trimmed();
        value.validate()?;

        Ok(Self {
            celebrity_id: CelebrityId::new(value.celebrity_id)?,
            celebrity_name: value.celebrity_name.map(CelebrityName::new).transpose()?,
            user_name: SubmitterName::new(value.user_name)?,
            email: EmailAddress::new(value.email)?,
            contact: ContactNumber::new(value.contact)?,
            purpose: EnquiryPurpose::new(value.purpose)?,
        })
    }
}

/// Validate a raw submission, reporting all field errors at once.
pub fn validate_enquiry(form: EnquiryForm) -> Result<EnquiryFormPayload, Vec<FieldError>> {
    EnquiryFormPayload::try_from(form).map_err(|EnquiryFormError(errors)| errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> EnquiryForm {
        EnquiryForm {
            celebrity_id: 1,
            celebrity_name: Some("Priya Sharma".to_string()),
            user_name: "Anita".to_string(),
            email: "anita@example.com".to_string(),
            contact: "+91 9876543210".to_string(),
            purpose: "Wedding reception in Jaipur, 300 guests".to_string(),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn valid_submission_produces_payload() {
        let payload = validate_enquiry(form()).unwrap();
        assert_eq!(payload.contact.digits(), "919876543210");
        assert_eq!(payload.celebrity_name.unwrap(), "Priya Sharma");
    }

    #[test]
    fn accepted_contact_formats() {
        for contact in ["9876543210", "(987) 654-3210", "987.654.3210", "+44 20 7946 0958"] {
            let mut form = form();
            form.contact = contact.to_string();
            assert!(validate_enquiry(form).is_ok(), "{contact} should be accepted");
        }
    }

    #[test]
    fn contact_with_letters_reports_character_message() {
        let mut form = form();
        form.contact = "98765abcde".to_string();
        let errors = validate_enquiry(form).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("contact", CONTACT_CHARACTERS_MESSAGE)]);
    }

    #[test]
    fn contact_with_too_few_digits_reports_length_message() {
        let mut form = form();
        form.contact = "12345".to_string();
        let errors = validate_enquiry(form).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("contact", CONTACT_LENGTH_MESSAGE)]);

        let mut form = super::tests::form();
        form.contact = "1234567890123456".to_string();
        assert!(validate_enquiry(form).is_err());
    }

    #[test]
    fn all_field_errors_are_reported_together_in_field_order() {
        let form = EnquiryForm {
            celebrity_id: 1,
            celebrity_name: None,
            user_name: "A".to_string(),
            email: "not-an-email".to_string(),
            contact: "12345".to_string(),
            purpose: "short".to_string(),
        };
        let errors = validate_enquiry(form).unwrap_err();
        assert_eq!(fields(&errors), vec!["userName", "email", "contact", "purpose"]);
        assert_eq!(errors[0].message, "Name must be at least 2 characters");
        assert_eq!(errors[3].message, "Please provide more details about your enquiry");
    }

    #[test]
    fn whitespace_is_trimmed_before_length_checks() {
        let mut form = form();
        form.user_name = "  A  ".to_string();
        let errors = validate_enquiry(form).unwrap_err();
        assert_eq!(fields(&errors), vec!["userName"]);
    }

    #[test]
    fn missing_celebrity_name_falls_back() {
        let mut form = form();
        form.celebrity_name = Some("   ".to_string());
        let payload = validate_enquiry(form).unwrap();
        let enquiry = payload.into_new_enquiry(CelebrityName::new("Rajesh Kumar").unwrap());
        assert_eq!(enquiry.celebrity_name, "Rajesh Kumar");
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let form: EnquiryForm = serde_json::from_str(
            r#"{"celebrityId":3,"userName":"Ravi","email":"ravi@example.com","contact":"9876543210","purpose":"Corporate offsite keynote"}"#,
        )
        .unwrap();
        assert_eq!(form.celebrity_id, 3);
        assert!(form.celebrity_name.is_none());
    }

    #[test]
    fn missing_fields_are_reported_as_field_errors() {
        let form: EnquiryForm = serde_json::from_str(r#"{"celebrityId":3}"#).unwrap();
        let errors = validate_enquiry(form).unwrap_err();
        assert_eq!(fields(&errors), vec!["userName", "email", "contact", "purpose"]);
    }
}
