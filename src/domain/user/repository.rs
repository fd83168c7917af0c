use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{EmailAddress, ResetToken, UserId},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>>;

    /// Look up the account holding `token` with an unexpired reset ticket.
    /// A missing token and an expired one are the same miss; callers cannot
    /// tell them apart.
    async fn find_by_reset_token(
        &self,
        token: &ResetToken,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<User>>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;
}
