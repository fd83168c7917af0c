use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{DisplayName, EmailAddress, UserId, UserUpdate},
};

pub struct UpdateAccountCommand {
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

impl UserCommandService {
    pub async fn update_account(&self, command: UpdateAccountCommand) -> ApplicationResult<UserDto> {
        let id = UserId::new(command.user_id)?;
        let name = DisplayName::new(command.name)?;
        let email = EmailAddress::new(command.email)?;

        if self.user_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("user not found"));
        }

        let update = UserUpdate::new(id).with_name(name).with_email(email);
        let user = self.user_repo.update(update).await?;

        Ok(user.into())
    }
}
