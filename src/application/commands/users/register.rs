use super::{
    UserCommandService,
    password::{ensure_passwords_match, validate_password},
};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{DisplayName, EmailAddress, NewUser, PasswordHash},
};

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let name = DisplayName::new(command.name)?;
        let email = EmailAddress::new(command.email)?;
        ensure_passwords_match(&command.password, &command.password_confirm)?;
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        // Duplicate emails surface as a conflict from the unique constraint.
        let user = self
            .user_repo
            .insert(NewUser::new(email, name, password_hash, created_at))
            .await?;

        tracing::info!(user_id = i64::from(user.id), "registered user");
        Ok(user.into())
    }
}
