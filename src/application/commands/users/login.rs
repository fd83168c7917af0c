use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::EmailAddress,
};

pub struct AuthenticateUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Check the credentials and hand back the account for the caller to
    /// establish a session with. Unknown email and wrong password are the
    /// same answer.
    pub async fn authenticate(
        &self,
        command: AuthenticateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let email = EmailAddress::new(command.email)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        Ok(user.into())
    }
}
