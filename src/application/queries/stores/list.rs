use super::StoreQueryService;
use crate::application::{dto::StorePageDto, error::ApplicationResult};

pub const STORES_PER_PAGE: u32 = 4;

impl StoreQueryService {
    /// One page of stores, newest first. A page past the end serves the
    /// last page instead; the DTO carries both the served and the
    /// requested page number.
    pub async fn list_stores(&self, page: u64) -> ApplicationResult<StorePageDto> {
        let requested_page = page.max(1);
        let limit = STORES_PER_PAGE;

        let offset = (requested_page - 1) * u64::from(limit);
        let (mut stores, mut total) = self.read_repo.list_page(offset, limit).await?;

        let mut pages = total.div_ceil(u64::from(limit));
        let mut served_page = requested_page;

        if stores.is_empty() && requested_page > 1 && total > 0 {
            served_page = pages;
            let offset = (served_page - 1) * u64::from(limit);
            let refetched = self.read_repo.list_page(offset, limit).await?;
            stores = refetched.0;
            total = refetched.1;
            pages = total.div_ceil(u64::from(limit));
        }

        Ok(StorePageDto {
            stores: stores.into_iter().map(Into::into).collect(),
            page: served_page,
            requested_page,
            pages,
            total,
        })
    }
}
