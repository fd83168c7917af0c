//! SMTP delivery for the `MailSender` port, via lettre.

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::mail::{MailMessage, MailSender},
};
use crate::config::MailConfig;
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType,
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};

#[derive(Clone)]
pub struct SmtpMailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailSender {
    /// Build a transport from configuration. Credentials are optional so a
    /// local relay works without authentication.
    pub fn new(config: &MailConfig) -> Result<Self, SmtpError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port);

        if let (Some(username), Some(password)) =
            (config.smtp_username.clone(), config.smtp_password.clone())
        {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            mailer: builder.build(),
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, message: MailMessage) -> ApplicationResult<()> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| ApplicationError::infrastructure("invalid from address"))?,
            )
            .to(message
                .recipient
                .parse()
                .map_err(|_| ApplicationError::infrastructure("invalid recipient address"))?)
            .subject(message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.body)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        self.mailer
            .send(email)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        tracing::debug!("mail dispatched");
        Ok(())
    }
}
