// src/application/queries/stores/service.rs
use std::sync::Arc;

use crate::domain::{
    review::ReviewRepository, store::StoreReadRepository, user::UserRepository,
};

pub struct StoreQueryService {
    pub(super) read_repo: Arc<dyn StoreReadRepository>,
    pub(super) review_repo: Arc<dyn ReviewRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl StoreQueryService {
    pub fn new(
        read_repo: Arc<dyn StoreReadRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            read_repo,
            review_repo,
            user_repo,
        }
    }
}
