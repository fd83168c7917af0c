// src/domain/store/entity.rs
use crate::domain::store::value_objects::{Location, StoreId, StoreName, StoreSlug, Tag};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Store {
    pub id: StoreId,
    pub name: StoreName,
    pub slug: StoreSlug,
    pub description: String,
    pub tags: Vec<Tag>,
    pub location: Location,
    pub photo: Option<String>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewStore {
    pub name: StoreName,
    pub slug: StoreSlug,
    pub description: String,
    pub tags: Vec<Tag>,
    pub location: Location,
    pub photo: Option<String>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct StoreUpdate {
    pub id: StoreId,
    pub name: Option<StoreName>,
    pub slug: Option<StoreSlug>,
    pub description: Option<String>,
    pub tags: Option<Vec<Tag>>,
    pub location: Option<Location>,
    pub photo: Option<Option<String>>,
}

impl StoreUpdate {
    pub fn new(id: StoreId) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            description: None,
            tags: None,
            location: None,
            photo: None,
        }
    }

    pub fn with_name(mut self, name: StoreName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: StoreSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_photo(mut self, photo: Option<String>) -> Self {
        self.photo = Some(photo);
        self
    }
}

/// One row of the tag aggregation: a tag and how many stores carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: Tag,
    pub count: u64,
}

/// One row of the top-rated aggregation: stores with at least two reviews,
/// ranked by average rating.
#[derive(Debug, Clone)]
pub struct TopStore {
    pub id: StoreId,
    pub name: StoreName,
    pub slug: StoreSlug,
    pub photo: Option<String>,
    pub average_rating: f64,
    pub review_count: u64,
}
