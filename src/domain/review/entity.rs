// src/domain/review/entity.rs
use crate::domain::review::value_objects::{Rating, ReviewId, ReviewText};
use crate::domain::store::StoreId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub store_id: StoreId,
    pub author_id: UserId,
    pub text: ReviewText,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub store_id: StoreId,
    pub author_id: UserId,
    pub text: ReviewText,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
}
