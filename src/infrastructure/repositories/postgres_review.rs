// src/infrastructure/repositories/postgres_review.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::review::{NewReview, Rating, Review, ReviewId, ReviewRepository, ReviewText};
use crate::domain::store::StoreId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReviewRow {
    id: i64,
    store_id: i64,
    author_id: i64,
    text: String,
    rating: i16,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReviewRow> for Review {
    type Error = DomainError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        Ok(Review {
            id: ReviewId::new(row.id)?,
            store_id: StoreId::new(row.store_id)?,
            author_id: UserId::new(row.author_id)?,
            text: ReviewText::new(row.text)?,
            rating: Rating::new(row.rating)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn insert(&self, review: NewReview) -> DomainResult<Review> {
        let NewReview {
            store_id,
            author_id,
            text,
            rating,
            created_at,
        } = review;

        let row = sqlx::query_as::<_, ReviewRow>(
            "INSERT INTO reviews (store_id, author_id, text, rating, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, store_id, author_id, text, rating, created_at",
        )
        .bind(i64::from(store_id))
        .bind(i64::from(author_id))
        .bind(text.as_str())
        .bind(i16::from(rating))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Review::try_from(row)
    }

    async fn list_for_store(&self, store_id: StoreId) -> DomainResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            "SELECT id, store_id, author_id, text, rating, created_at
             FROM reviews
             WHERE store_id = $1
             ORDER BY created_at DESC",
        )
        .bind(i64::from(store_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Review::try_from).collect()
    }
}
