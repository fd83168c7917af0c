use crate::application::dto::reviews::ReviewDto;
use crate::domain::store::{Location, Store, TagCount, TopStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDto {
    pub longitude: f64,
    pub latitude: f64,
    pub address: String,
}

impl From<Location> for LocationDto {
    fn from(location: Location) -> Self {
        Self {
            longitude: location.longitude,
            latitude: location.latitude,
            address: location.address,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub tags: Vec<String>,
    pub location: LocationDto,
    pub photo: Option<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Store> for StoreDto {
    fn from(store: Store) -> Self {
        Self {
            id: store.id.into(),
            name: store.name.into(),
            slug: store.slug.into(),
            description: store.description,
            tags: store.tags.into_iter().map(String::from).collect(),
            location: store.location.into(),
            photo: store.photo,
            author_id: store.author_id.into(),
            created_at: store.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreWithReviewsDto {
    pub store: StoreDto,
    pub reviews: Vec<ReviewDto>,
}

/// One page of the store listing. When the requested page lies past the
/// end, the last page is served instead; `requested_page` keeps the
/// original number so the caller can tell the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorePageDto {
    pub stores: Vec<StoreDto>,
    pub page: u64,
    pub requested_page: u64,
    pub pages: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCountDto {
    pub tag: String,
    pub count: u64,
}

impl From<TagCount> for TagCountDto {
    fn from(value: TagCount) -> Self {
        Self {
            tag: value.tag.into(),
            count: value.count,
        }
    }
}

/// Tag browse page: every tag with its count, next to the stores matching
/// the selected tag (or any tag when none is selected).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagBrowseDto {
    pub tag: Option<String>,
    pub tags: Vec<TagCountDto>,
    pub stores: Vec<StoreDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopStoreDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub photo: Option<String>,
    pub average_rating: f64,
    pub review_count: u64,
}

impl From<TopStore> for TopStoreDto {
    fn from(value: TopStore) -> Self {
        Self {
            id: value.id.into(),
            name: value.name.into(),
            slug: value.slug.into(),
            photo: value.photo,
            average_rating: value.average_rating,
            review_count: value.review_count,
        }
    }
}
