use crate::domain::review::Review;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDto {
    pub id: i64,
    pub store_id: i64,
    pub author_id: i64,
    pub text: String,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.into(),
            store_id: review.store_id.into(),
            author_id: review.author_id.into(),
            text: review.text.into(),
            rating: review.rating.into(),
            created_at: review.created_at,
        }
    }
}
