// tests/support/builders.rs
//! Fluent builders for seeding the in-memory repositories.

use chrono::{DateTime, Duration, TimeZone, Utc};

use store_directory::domain::store::{
    Location, NewStore, Store, StoreName, StoreSlug, StoreWriteRepository, Tag,
};
use store_directory::domain::user::{
    DisplayName, EmailAddress, NewUser, PasswordHash, User, UserId, UserRepository,
};

use super::fakes::{InMemoryStoreRepo, InMemoryUserRepo};

/// Fixed reference instant so ordering assertions are deterministic.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single().unwrap()
}

pub struct UserBuilder {
    email: String,
    name: String,
    password: String,
    created_at: DateTime<Utc>,
}

impl UserBuilder {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            name: "Test User".to_string(),
            password: "Sufficient1".to_string(),
            created_at: base_time(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    /// Insert through the repository; the stored hash matches what
    /// `DummyPasswordHasher` would produce for the builder's password.
    pub async fn insert(self, repo: &InMemoryUserRepo) -> User {
        repo.insert(NewUser::new(
            EmailAddress::new(self.email).unwrap(),
            DisplayName::new(self.name).unwrap(),
            PasswordHash::new(format!("hashed:{}", self.password)).unwrap(),
            self.created_at,
        ))
        .await
        .unwrap()
    }
}

pub struct StoreBuilder {
    name: String,
    slug: String,
    description: String,
    tags: Vec<String>,
    longitude: f64,
    latitude: f64,
    address: String,
    photo: Option<String>,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl StoreBuilder {
    pub fn new(name: &str) -> Self {
        let slug = name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Self {
            name: name.to_string(),
            slug,
            description: String::new(),
            tags: Vec::new(),
            longitude: -79.0,
            latitude: 43.7,
            address: "123 Example Street".to_string(),
            photo: None,
            author_id: 1,
            created_at: base_time(),
        }
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = slug.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn location(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = longitude;
        self.latitude = latitude;
        self
    }

    pub fn photo(mut self, photo: &str) -> Self {
        self.photo = Some(photo.to_string());
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    /// Shift the creation instant relative to `base_time`, for ordering.
    pub fn created_minutes_ago(mut self, minutes: i64) -> Self {
        self.created_at = base_time() - Duration::minutes(minutes);
        self
    }

    pub async fn insert(self, repo: &InMemoryStoreRepo) -> Store {
        repo.insert(NewStore {
            name: StoreName::new(self.name).unwrap(),
            slug: StoreSlug::new(self.slug).unwrap(),
            description: self.description,
            tags: self
                .tags
                .into_iter()
                .map(|t| Tag::new(t).unwrap())
                .collect(),
            location: Location::new(self.longitude, self.latitude, self.address).unwrap(),
            photo: self.photo,
            author_id: UserId(self.author_id),
            created_at: self.created_at,
        })
        .await
        .unwrap()
    }
}
