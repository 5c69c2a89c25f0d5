use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::enquiry::{Enquiry as DomainEnquiry, NewEnquiry as DomainNewEnquiry};
use crate::domain::types::{
    CelebrityName, ContactNumber, EmailAddress, EnquiryPurpose, SubmitterName,
    TypeConstraintError,
};

/// Diesel model representing a row in the `enquiries` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::enquiries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Enquiry {
    pub id: i32,
    pub celebrity_id: i32,
    pub celebrity_name: String,
    pub user_name: String,
    pub email: String,
    pub contact: String,
    pub purpose: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::enquiries)]
pub struct NewEnquiry<'a> {
    pub celebrity_id: i32,
    pub celebrity_name: &'a str,
    pub user_name: &'a str,
    pub email: &'a str,
    pub contact: &'a str,
    pub purpose: &'a str,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Enquiry> for DomainEnquiry {
    type Error = TypeConstraintError;

    fn try_from(enquiry: Enquiry) -> Result<Self, Self::Error> {
        Ok(Self {
            id: enquiry.id.try_into()?,
            celebrity_id: enquiry.celebrity_id.try_into()?,
            celebrity_name: CelebrityName::new(enquiry.celebrity_name)?,
            user_name: SubmitterName::new(enquiry.user_name)?,
            email: EmailAddress::new(enquiry.email)?,
            contact: ContactNumber::new(enquiry.contact)?,
            purpose: EnquiryPurpose::new(enquiry.purpose)?,
            created_at: enquiry.created_at,
        })
    }
}

impl<'a> NewEnquiry<'a> {
    /// Borrow a validated enquiry for insertion, stamped with `created_at`.
    pub fn new(enquiry: &'a DomainNewEnquiry, created_at: NaiveDateTime) -> Self {
        Self {
            celebrity_id: enquiry.celebrity_id.get(),
            celebrity_name: enquiry.celebrity_name.as_str(),
            user_name: enquiry.user_name.as_str(),
            email: enquiry.email.as_str(),
            contact: enquiry.contact.as_str(),
            purpose: enquiry.purpose.as_str(),
            created_at,
        }
    }
}
