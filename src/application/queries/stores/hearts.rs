use super::StoreQueryService;
use crate::{
    application::{
        dto::StoreDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

impl StoreQueryService {
    /// The stores on the user's hearts list.
    pub async fn hearted_stores(&self, user_id: i64) -> ApplicationResult<Vec<StoreDto>> {
        let user_id = UserId::new(user_id)?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let stores = self.read_repo.find_by_ids(&user.hearts).await?;
        Ok(stores.into_iter().map(Into::into).collect())
    }
}
