use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::enquiry::Enquiry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryDto {
    pub id: i32,
    pub celebrity_id: i32,
    pub celebrity_name: String,
    pub user_name: String,
    pub email: String,
    pub contact: String,
    pub purpose: String,
    pub created_at: NaiveDateTime,
}

impl From<Enquiry> for EnquiryDto {
    fn from(value: Enquiry) -> Self {
        Self {
            id: value.id.get(),
            celebrity_id: value.celebrity_id.get(),
            celebrity_name: value.celebrity_name.into_inner(),
            user_name: value.user_name.into_inner(),
            email: value.email.into_inner(),
            contact: value.contact.into_inner(),
            purpose: value.purpose.into_inner(),
            created_at: value.created_at,
        }
    }
}
