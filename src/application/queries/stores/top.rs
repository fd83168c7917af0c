use super::StoreQueryService;
use crate::application::{dto::TopStoreDto, error::ApplicationResult};

const TOP_LIMIT: u32 = 10;

impl StoreQueryService {
    /// Stores with at least two reviews, ranked by average rating.
    pub async fn top_stores(&self) -> ApplicationResult<Vec<TopStoreDto>> {
        let stores = self.read_repo.top_rated(TOP_LIMIT).await?;
        Ok(stores.into_iter().map(Into::into).collect())
    }
}
