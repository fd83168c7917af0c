// src/application/queries/users/service.rs
use std::sync::Arc;

use crate::domain::user::UserRepository;

/// Read side for accounts; the profile page goes through here.
pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}
