use super::StoreQueryService;
use crate::application::{dto::StoreDto, error::ApplicationResult};

const SEARCH_LIMIT: u32 = 5;

impl StoreQueryService {
    /// Full-text search over store names and descriptions, best matches
    /// first. A blank query matches nothing.
    pub async fn search_stores(&self, query: &str) -> ApplicationResult<Vec<StoreDto>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let stores = self.read_repo.search(query, SEARCH_LIMIT).await?;
        Ok(stores.into_iter().map(Into::into).collect())
    }
}
