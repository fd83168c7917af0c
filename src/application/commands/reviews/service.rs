// src/application/commands/reviews/service.rs
use std::sync::Arc;

use crate::{
    application::ports::ClockPort,
    domain::review::ReviewRepository,
    domain::store::StoreReadRepository,
};

pub struct ReviewCommandService {
    pub(super) review_repo: Arc<dyn ReviewRepository>,
    pub(super) store_repo: Arc<dyn StoreReadRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl ReviewCommandService {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        store_repo: Arc<dyn StoreReadRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            review_repo,
            store_repo,
            clock,
        }
    }
}
