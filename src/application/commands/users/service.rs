// src/application/commands/users/service.rs
use std::sync::Arc;

use chrono::Duration;

use crate::application::ports::{
    ClockPort, MailSenderPort, PasswordHasherPort, ResetTokenSourcePort,
};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<PasswordHasherPort>,
    pub(super) reset_tokens: Arc<ResetTokenSourcePort>,
    pub(super) mailer: Arc<MailSenderPort>,
    pub(super) clock: Arc<ClockPort>,
    pub(super) reset_ttl: Duration,
    pub(super) public_base_url: String,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        reset_tokens: Arc<ResetTokenSourcePort>,
        mailer: Arc<MailSenderPort>,
        clock: Arc<ClockPort>,
        reset_ttl: Duration,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            reset_tokens,
            mailer,
            clock,
            reset_ttl,
            public_base_url: public_base_url.into(),
        }
    }
}
