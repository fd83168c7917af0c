use crate::domain::errors::DomainResult;
use crate::domain::store::entity::{NewStore, Store, StoreUpdate, TagCount, TopStore};
use crate::domain::store::value_objects::{StoreId, StoreSlug, Tag};
use async_trait::async_trait;

#[async_trait]
pub trait StoreWriteRepository: Send + Sync {
    async fn insert(&self, store: NewStore) -> DomainResult<Store>;
    async fn update(&self, update: StoreUpdate) -> DomainResult<Store>;
}

#[async_trait]
pub trait StoreReadRepository: Send + Sync {
    async fn find_by_id(&self, id: StoreId) -> DomainResult<Option<Store>>;

    async fn find_by_slug(&self, slug: &StoreSlug) -> DomainResult<Option<Store>>;

    async fn find_by_ids(&self, ids: &[StoreId]) -> DomainResult<Vec<Store>>;

    /// Number of existing slugs matching the anchored, case-insensitive
    /// pattern `^base(-[0-9]+)?$`. Drives suffix disambiguation.
    async fn count_slug_matches(&self, base: &str) -> DomainResult<u64>;

    /// One page of stores, newest first, plus the total store count.
    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Store>, u64)>;

    /// Stores carrying `tag`, or stores carrying any tag at all when `None`.
    async fn find_by_tag(&self, tag: Option<&Tag>) -> DomainResult<Vec<Store>>;

    /// Full-text search over name and description, best matches first.
    async fn search(&self, query: &str, limit: u32) -> DomainResult<Vec<Store>>;

    /// Stores within `max_distance_m` metres of the given point, nearest
    /// first.
    async fn find_near(
        &self,
        longitude: f64,
        latitude: f64,
        max_distance_m: f64,
        limit: u32,
    ) -> DomainResult<Vec<Store>>;

    /// Per-tag store counts, most used first.
    async fn tag_counts(&self) -> DomainResult<Vec<TagCount>>;

    /// Stores with two or more reviews ranked by average rating, capped at
    /// `limit`.
    async fn top_rated(&self, limit: u32) -> DomainResult<Vec<TopStore>>;
}
