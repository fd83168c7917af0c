// src/application/commands/stores/update.rs
use super::StoreCommandService;
use crate::{
    application::{
        dto::StoreDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::store::{Location, StoreId, StoreName, StoreUpdate, Tag},
    domain::user::UserId,
};

pub struct UpdateStoreCommand {
    pub store_id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub location: Option<(f64, f64, String)>,
    pub photo: Option<Option<String>>,
}

impl StoreCommandService {
    /// Update a store. Only the author may edit; the slug is recomputed
    /// only when the name actually changes, so plain re-saves never touch
    /// it.
    pub async fn update_store(
        &self,
        actor_id: i64,
        command: UpdateStoreCommand,
    ) -> ApplicationResult<StoreDto> {
        let actor_id = UserId::new(actor_id)?;
        let store_id = StoreId::new(command.store_id)?;

        let store = self
            .read_repo
            .find_by_id(store_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("store not found"))?;

        if store.author_id != actor_id {
            return Err(ApplicationError::forbidden(
                "you must own a store in order to edit it",
            ));
        }

        let mut update = StoreUpdate::new(store_id);

        if let Some(name) = command.name {
            let name = StoreName::new(name)?;
            if name != store.name {
                let slug = self
                    .slug_service
                    .generate_unique_slug(&name, Some(&store.slug))
                    .await?;
                update = update.with_slug(slug);
            }
            update = update.with_name(name);
        }
        if let Some(description) = command.description {
            update = update.with_description(description);
        }
        if let Some(tags) = command.tags {
            let tags = tags.into_iter().map(Tag::new).collect::<Result<Vec<_>, _>>()?;
            update = update.with_tags(tags);
        }
        if let Some((longitude, latitude, address)) = command.location {
            update = update.with_location(Location::new(longitude, latitude, address)?);
        }
        if let Some(photo) = command.photo {
            update = update.with_photo(photo);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
