use super::UserQueryService;
use crate::application::{
    dto::UserDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;

impl UserQueryService {
    pub async fn get_account(&self, user_id: i64) -> ApplicationResult<UserDto> {
        let id = UserId::new(user_id)?;

        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(user.into())
    }
}
