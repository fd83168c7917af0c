// src/application/commands/stores/create.rs
use super::StoreCommandService;
use crate::{
    application::{dto::StoreDto, error::ApplicationResult},
    domain::store::{Location, NewStore, StoreName, Tag},
    domain::user::UserId,
};

pub struct CreateStoreCommand {
    pub author_id: i64,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub longitude: f64,
    pub latitude: f64,
    pub address: String,
    pub photo: Option<String>,
}

impl CreateStoreCommand {
    pub fn builder() -> CreateStoreCommandBuilder {
        CreateStoreCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateStoreCommandBuilder {
    author_id: Option<i64>,
    name: Option<String>,
    description: String,
    tags: Vec<String>,
    longitude: Option<f64>,
    latitude: Option<f64>,
    address: Option<String>,
    photo: Option<String>,
}

impl CreateStoreCommandBuilder {
    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn location(mut self, longitude: f64, latitude: f64, address: impl Into<String>) -> Self {
        self.longitude = Some(longitude);
        self.latitude = Some(latitude);
        self.address = Some(address.into());
        self
    }

    pub fn photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    pub fn build(self) -> Result<CreateStoreCommand, &'static str> {
        Ok(CreateStoreCommand {
            author_id: self.author_id.ok_or("author is required")?,
            name: self.name.ok_or("name is required")?,
            description: self.description,
            tags: self.tags,
            longitude: self.longitude.ok_or("coordinates are required")?,
            latitude: self.latitude.ok_or("coordinates are required")?,
            address: self.address.ok_or("address is required")?,
            photo: self.photo,
        })
    }
}

impl StoreCommandService {
    pub async fn create_store(&self, command: CreateStoreCommand) -> ApplicationResult<StoreDto> {
        let author_id = UserId::new(command.author_id)?;
        let name = StoreName::new(command.name)?;
        let location = Location::new(command.longitude, command.latitude, command.address)?;
        let tags = command
            .tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<Vec<_>, _>>()?;

        let slug = self.slug_service.generate_unique_slug(&name, None).await?;

        let new_store = NewStore {
            name,
            slug,
            description: command.description,
            tags,
            location,
            photo: command.photo,
            author_id,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_store).await?;
        tracing::info!(
            store_id = i64::from(created.id),
            slug = created.slug.as_str(),
            "created store"
        );
        Ok(created.into())
    }
}
