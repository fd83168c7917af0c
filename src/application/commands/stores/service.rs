// src/application/commands/stores/service.rs
use std::sync::Arc;

use crate::{
    application::ports::ClockPort,
    domain::store::{
        StoreReadRepository, StoreWriteRepository, services::StoreSlugService,
    },
};

pub struct StoreCommandService {
    pub(super) write_repo: Arc<dyn StoreWriteRepository>,
    pub(super) read_repo: Arc<dyn StoreReadRepository>,
    pub(super) slug_service: Arc<StoreSlugService>,
    pub(super) clock: Arc<ClockPort>,
}

impl StoreCommandService {
    pub fn new(
        write_repo: Arc<dyn StoreWriteRepository>,
        read_repo: Arc<dyn StoreReadRepository>,
        slug_service: Arc<StoreSlugService>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }
}
