// src/application/services/mod.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        commands::{
            reviews::ReviewCommandService, stores::StoreCommandService,
            users::UserCommandService,
        },
        ports::{ClockPort, MailSenderPort, PasswordHasherPort, ResetTokenSourcePort, SlugGeneratorPort},
        queries::{stores::StoreQueryService, users::UserQueryService},
    },
    domain::{
        review::ReviewRepository,
        store::{StoreReadRepository, StoreWriteRepository, services::StoreSlugService},
        user::UserRepository,
    },
};

/// Everything the embedding layer needs, wired together once at startup.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub store_commands: Arc<StoreCommandService>,
    pub review_commands: Arc<ReviewCommandService>,
    pub store_queries: Arc<StoreQueryService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        store_write_repo: Arc<dyn StoreWriteRepository>,
        store_read_repo: Arc<dyn StoreReadRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        reset_tokens: Arc<ResetTokenSourcePort>,
        mailer: Arc<MailSenderPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        reset_ttl: Duration,
        public_base_url: impl Into<String>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&reset_tokens),
            Arc::clone(&mailer),
            Arc::clone(&clock),
            reset_ttl,
            public_base_url,
        ));

        let slug_service = Arc::new(StoreSlugService::new(
            Arc::clone(&store_read_repo),
            Arc::clone(&slugger),
        ));

        let store_commands = Arc::new(StoreCommandService::new(
            Arc::clone(&store_write_repo),
            Arc::clone(&store_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let review_commands = Arc::new(ReviewCommandService::new(
            Arc::clone(&review_repo),
            Arc::clone(&store_read_repo),
            Arc::clone(&clock),
        ));

        let store_queries = Arc::new(StoreQueryService::new(
            Arc::clone(&store_read_repo),
            Arc::clone(&review_repo),
            Arc::clone(&user_repo),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            user_commands,
            store_commands,
            review_commands,
            store_queries,
            user_queries,
        }
    }
}
