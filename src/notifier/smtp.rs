use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::enquiry::Enquiry;
use crate::models::config::SmtpConfig;
use crate::notifier::{EnquiryEmailRenderer, EnquiryNotifier, NotifierError};

/// Mails each enquiry to the configured business inbox over STARTTLS.
pub struct SmtpNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
    renderer: EnquiryEmailRenderer,
}

impl SmtpNotifier {
    pub fn from_config(config: &SmtpConfig) -> Result<Self, NotifierError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .timeout(Some(Duration::from_secs(config.timeout_secs)));

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        Ok(Self {
            mailer: builder.build(),
            from: config.from_address.parse()?,
            to: config.notification_email.parse()?,
            renderer: EnquiryEmailRenderer::new()?,
        })
    }
}

#[async_trait]
impl EnquiryNotifier for SmtpNotifier {
    async fn notify(&self, enquiry: &Enquiry) -> Result<(), NotifierError> {
        let email = self.renderer.render(enquiry)?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(email.subject)
            .multipart(MultiPart::alternative_plain_html(email.text, email.html))?;

        self.mailer.send(message).await?;

        log::info!("Email notification sent for enquiry {}", enquiry.id);
        Ok(())
    }
}
