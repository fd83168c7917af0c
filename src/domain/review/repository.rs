use crate::domain::errors::DomainResult;
use crate::domain::review::entity::{NewReview, Review};
use crate::domain::store::StoreId;
use async_trait::async_trait;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(&self, review: NewReview) -> DomainResult<Review>;

    /// Reviews for a store, newest first.
    async fn list_for_store(&self, store_id: StoreId) -> DomainResult<Vec<Review>>;
}
