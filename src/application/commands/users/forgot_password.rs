use super::UserCommandService;
use crate::{
    application::{error::ApplicationResult, ports::mail::MailMessage},
    domain::user::{EmailAddress, PasswordReset, ResetToken, User, UserUpdate},
};
pub struct ForgotPasswordCommand {
    pub email: String,
}

impl UserCommandService {
    /// Issue a password-reset ticket and mail the redemption link.
    ///
    /// The outcome is identical whether or not an account exists for the
    /// address, so callers cannot probe which emails are registered. The
    /// token itself only ever travels through the mail collaborator.
    pub async fn forgot_password(&self, command: ForgotPasswordCommand) -> ApplicationResult<()> {
        let email = EmailAddress::new(command.email)?;

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            tracing::debug!("password reset requested for unknown email");
            return Ok(());
        };

        let token = ResetToken::new(self.reset_tokens.generate())?;
        let expires_at = self.clock.now() + self.reset_ttl;
        // A fresh request overwrites any ticket still pending.
        let reset = PasswordReset::new(token.clone(), expires_at);
        let user = self
            .user_repo
            .update(UserUpdate::new(user.id).with_reset(reset))
            .await?;

        self.mailer.send(self.reset_mail(&user, &token)).await?;
        tracing::info!(user_id = i64::from(user.id), "password reset mailed");
        Ok(())
    }

    fn reset_mail(&self, user: &User, token: &ResetToken) -> MailMessage {
        let reset_url = format!(
            "{}/account/reset/{}",
            self.public_base_url.trim_end_matches('/'),
            token.as_str()
        );
        MailMessage {
            recipient: user.email.to_string(),
            subject: "Password Reset".into(),
            body: format!(
                "Hi {},\n\nYou requested a password reset. Visit the link \
                 below to choose a new password; it is valid for a limited \
                 time and for a single use:\n\n{}\n\n\
                 If you did not request this, you can ignore this message.\n",
                user.name, reset_url
            ),
        }
    }
}
