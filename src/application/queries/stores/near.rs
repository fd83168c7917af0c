use super::StoreQueryService;
use crate::application::{
    dto::StoreDto,
    error::{ApplicationError, ApplicationResult},
};

const MAX_DISTANCE_M: f64 = 10_000.0;
const NEAR_LIMIT: u32 = 10;

impl StoreQueryService {
    /// Stores within 10 km of the given point, nearest first. Feeds the
    /// map view of the embedding layer.
    pub async fn stores_near(
        &self,
        longitude: f64,
        latitude: f64,
    ) -> ApplicationResult<Vec<StoreDto>> {
        if !(-180.0..=180.0).contains(&longitude) || !(-90.0..=90.0).contains(&latitude) {
            return Err(ApplicationError::validation("invalid coordinates"));
        }

        let stores = self
            .read_repo
            .find_near(longitude, latitude, MAX_DISTANCE_M, NEAR_LIMIT)
            .await?;
        Ok(stores.into_iter().map(Into::into).collect())
    }
}
