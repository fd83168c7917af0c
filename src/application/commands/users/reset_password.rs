use super::{
    UserCommandService,
    password::{ensure_passwords_match, validate_password},
};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{PasswordHash, ResetToken, User, UserUpdate},
};

/// Shown for a bogus token and an expired one alike; the two cases must be
/// indistinguishable to the caller.
pub(super) const RESET_INVALID: &str = "password reset is invalid or has expired";

pub struct ResetPasswordCommand {
    pub token: String,
    pub password: String,
    pub password_confirm: String,
}

impl UserCommandService {
    /// Look up the account behind a reset token, e.g. to decide whether to
    /// show the reset form. Does not consume the ticket.
    pub async fn validate_reset_token(&self, token: &str) -> ApplicationResult<UserDto> {
        let user = self.find_by_valid_token(token).await?;
        Ok(user.into())
    }

    /// Redeem a reset ticket: set the new password and clear the ticket in
    /// one write, making it single-use. Returns the account so the caller
    /// can establish an authenticated session.
    pub async fn reset_password(&self, command: ResetPasswordCommand) -> ApplicationResult<UserDto> {
        let user = self.find_by_valid_token(&command.token).await?;

        ensure_passwords_match(&command.password, &command.password_confirm)?;
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let update = UserUpdate::new(user.id)
            .with_password_hash(password_hash)
            .with_reset_cleared();
        let user = self.user_repo.update(update).await?;

        tracing::info!(user_id = i64::from(user.id), "password reset redeemed");
        Ok(user.into())
    }

    async fn find_by_valid_token(&self, token: &str) -> ApplicationResult<User> {
        let token =
            ResetToken::new(token).map_err(|_| ApplicationError::not_found(RESET_INVALID))?;
        self.user_repo
            .find_by_reset_token(&token, self.clock.now())
            .await?
            .ok_or_else(|| ApplicationError::not_found(RESET_INVALID))
    }
}
