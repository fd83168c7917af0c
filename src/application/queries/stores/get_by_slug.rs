use super::StoreQueryService;
use crate::{
    application::{
        dto::StoreWithReviewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::store::StoreSlug,
};

impl StoreQueryService {
    pub async fn get_store_by_slug(&self, slug: &str) -> ApplicationResult<StoreWithReviewsDto> {
        let slug = StoreSlug::new(slug)?;

        let store = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("store not found"))?;

        let reviews = self.review_repo.list_for_store(store.id).await?;

        Ok(StoreWithReviewsDto {
            store: store.into(),
            reviews: reviews.into_iter().map(Into::into).collect(),
        })
    }
}
