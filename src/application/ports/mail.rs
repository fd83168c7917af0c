// src/application/ports/mail.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// A rendered outbound message. Templating happens in the embedding layer;
/// this core only hands over finished text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Delivery collaborator. Failures bubble to the caller; the core performs
/// no retries of its own.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, message: MailMessage) -> ApplicationResult<()>;
}
