// src/domain/user/entity.rs
use crate::domain::store::StoreId;
use crate::domain::user::value_objects::{
    DisplayName, EmailAddress, PasswordHash, PasswordReset, UserId,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub name: DisplayName,
    pub password_hash: PasswordHash,
    pub reset: Option<PasswordReset>,
    pub hearts: Vec<StoreId>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn request_reset(&mut self, reset: PasswordReset) {
        self.reset = Some(reset);
    }

    pub fn clear_reset(&mut self) {
        self.reset = None;
    }

    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }

    pub fn has_hearted(&self, store_id: StoreId) -> bool {
        self.hearts.contains(&store_id)
    }

    /// Add the store to the hearts list if absent, remove it if present.
    /// Returns the resulting list without mutating the entity; persistence
    /// goes through `UserUpdate`.
    pub fn toggled_hearts(&self, store_id: StoreId) -> Vec<StoreId> {
        if self.has_hearted(store_id) {
            self.hearts
                .iter()
                .copied()
                .filter(|id| *id != store_id)
                .collect()
        } else {
            let mut hearts = self.hearts.clone();
            hearts.push(store_id);
            hearts
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub name: DisplayName,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        email: EmailAddress,
        name: DisplayName,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            name,
            password_hash,
            created_at,
        }
    }
}

/// Change to the account's reset ticket carried by an update.
#[derive(Debug, Clone)]
pub enum ResetChange {
    Set(PasswordReset),
    Clear,
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub email: Option<EmailAddress>,
    pub name: Option<DisplayName>,
    pub password_hash: Option<PasswordHash>,
    pub reset: Option<ResetChange>,
    pub hearts: Option<Vec<StoreId>>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            email: None,
            name: None,
            password_hash: None,
            reset: None,
            hearts: None,
        }
    }

    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_name(mut self, name: DisplayName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_reset(mut self, reset: PasswordReset) -> Self {
        self.reset = Some(ResetChange::Set(reset));
        self
    }

    pub fn with_reset_cleared(mut self) -> Self {
        self.reset = Some(ResetChange::Clear);
        self
    }

    pub fn with_hearts(mut self, hearts: Vec<StoreId>) -> Self {
        self.hearts = Some(hearts);
        self
    }
}
