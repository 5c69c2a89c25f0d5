use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CelebrityId, CelebrityName, ContactNumber, EmailAddress, EnquiryId, EnquiryPurpose,
    SubmitterName,
};

/// Booking request captured from the enquiry form. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enquiry {
    pub id: EnquiryId,
    pub celebrity_id: CelebrityId,
    /// Name as it was when the enquiry was submitted; not kept in sync with renames.
    pub celebrity_name: CelebrityName,
    pub user_name: SubmitterName,
    pub email: EmailAddress,
    pub contact: ContactNumber,
    pub purpose: EnquiryPurpose,
    pub created_at: NaiveDateTime,
}

/// Validated enquiry payload; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEnquiry {
    pub celebrity_id: CelebrityId,
    pub celebrity_name: CelebrityName,
    pub user_name: SubmitterName,
    pub email: EmailAddress,
    pub contact: ContactNumber,
    pub purpose: EnquiryPurpose,
}
