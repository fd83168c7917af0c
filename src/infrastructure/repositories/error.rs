use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_STORE_AUTHOR: &str = "stores_author_id_fkey";
const CNT_REVIEW_STORE: &str = "reviews_store_id_fkey";
const CNT_REVIEW_AUTHOR: &str = "reviews_author_id_fkey";
const CNT_REVIEW_RATING: &str = "reviews_rating_chk";
const CNT_HEART_STORE: &str = "user_hearts_store_id_fkey";
const CNT_HEART_USER: &str = "user_hearts_user_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_STORE_AUTHOR | CNT_REVIEW_AUTHOR | CNT_HEART_USER => {
                        DomainError::NotFound("user not found".into())
                    }
                    CNT_REVIEW_STORE | CNT_HEART_STORE => {
                        DomainError::NotFound("store not found".into())
                    }
                    CNT_REVIEW_RATING => {
                        DomainError::Validation("rating must be between 1 and 5".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
