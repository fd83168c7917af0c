// src/application/commands/reviews/add.rs
use super::ReviewCommandService;
use crate::{
    application::{
        dto::ReviewDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::review::{NewReview, Rating, ReviewText},
    domain::store::StoreId,
    domain::user::UserId,
};

pub struct AddReviewCommand {
    pub store_id: i64,
    pub author_id: i64,
    pub text: String,
    pub rating: i16,
}

impl ReviewCommandService {
    pub async fn add_review(&self, command: AddReviewCommand) -> ApplicationResult<ReviewDto> {
        let store_id = StoreId::new(command.store_id)?;
        let author_id = UserId::new(command.author_id)?;
        let text = ReviewText::new(command.text)?;
        let rating = Rating::new(command.rating)?;

        if self.store_repo.find_by_id(store_id).await?.is_none() {
            return Err(ApplicationError::not_found("store not found"));
        }

        let review = self
            .review_repo
            .insert(NewReview {
                store_id,
                author_id,
                text,
                rating,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(review.into())
    }
}
