//! Best-effort notification of the business inbox about new enquiries.
//!
//! A notifier is handed each enquiry after it has been stored. Its failures
//! are reported to the caller for logging only; they never undo the stored
//! enquiry.

use async_trait::async_trait;
use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::enquiry::Enquiry;

pub mod smtp;

pub use smtp::SmtpNotifier;

const HTML_TEMPLATE: &str = "email/enquiry.html";
const TEXT_TEMPLATE: &str = "email/enquiry.txt";

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("failed to render notification: {0}")]
    Render(#[from] tera::Error),
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build email: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Sink for new-enquiry notifications.
#[async_trait]
pub trait EnquiryNotifier: Send + Sync {
    async fn notify(&self, enquiry: &Enquiry) -> Result<(), NotifierError>;
}

/// Used when no mail transport is configured: records that the
/// notification was skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl EnquiryNotifier for LogNotifier {
    async fn notify(&self, enquiry: &Enquiry) -> Result<(), NotifierError> {
        log::warn!(
            "Email service not configured, skipping notification for enquiry {}",
            enquiry.id
        );
        Ok(())
    }
}

/// Rendered notification content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Renders enquiry emails from the bundled templates.
#[derive(Debug, Clone)]
pub struct EnquiryEmailRenderer {
    tera: Tera,
}

impl EnquiryEmailRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (
                HTML_TEMPLATE,
                include_str!("../../templates/email/enquiry.html"),
            ),
            (
                TEXT_TEMPLATE,
                include_str!("../../templates/email/enquiry.txt"),
            ),
        ])?;
        Ok(Self { tera })
    }

    pub fn render(&self, enquiry: &Enquiry) -> Result<EnquiryEmail, NotifierError> {
        let mut context = Context::new();
        context.insert("celebrity_name", enquiry.celebrity_name.as_str());
        context.insert("celebrity_id", &enquiry.celebrity_id.get());
        context.insert("user_name", enquiry.user_name.as_str());
        context.insert("email", enquiry.email.as_str());
        context.insert("contact", enquiry.contact.as_str());
        context.insert("purpose", enquiry.purpose.as_str());
        context.insert("enquiry_id", &enquiry.id.get());
        context.insert(
            "received_at",
            &enquiry.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        );

        Ok(EnquiryEmail {
            subject: format!("New Enquiry for {}", enquiry.celebrity_name),
            html: self.tera.render(HTML_TEMPLATE, &context)?,
            text: self.tera.render(TEXT_TEMPLATE, &context)?.trim().to_string(),
        })
    }
}
