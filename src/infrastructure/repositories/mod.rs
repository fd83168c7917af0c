// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_review;
mod postgres_store;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_review::PostgresReviewRepository;
pub use postgres_store::{PostgresStoreReadRepository, PostgresStoreWriteRepository};
pub use postgres_user::PostgresUserRepository;
