use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::store::StoreId,
    domain::user::{UserId, UserUpdate},
};

impl UserCommandService {
    /// Add the store to the user's hearts if it is not there, remove it if
    /// it is. Returns the updated account.
    pub async fn toggle_heart(&self, user_id: i64, store_id: i64) -> ApplicationResult<UserDto> {
        let user_id = UserId::new(user_id)?;
        let store_id = StoreId::new(store_id)?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let hearts = user.toggled_hearts(store_id);
        let user = self
            .user_repo
            .update(UserUpdate::new(user_id).with_hearts(hearts))
            .await?;

        Ok(user.into())
    }
}
