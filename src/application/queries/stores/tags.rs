use super::StoreQueryService;
use crate::{
    application::{dto::TagBrowseDto, error::ApplicationResult},
    domain::store::Tag,
};

impl StoreQueryService {
    /// The tag cloud (every tag with its count) plus the stores carrying
    /// `tag`, or any tag at all when none is given.
    pub async fn browse_by_tag(&self, tag: Option<String>) -> ApplicationResult<TagBrowseDto> {
        let selected = tag.map(Tag::new).transpose()?;

        let tags = self.read_repo.tag_counts().await?;
        let stores = self.read_repo.find_by_tag(selected.as_ref()).await?;

        Ok(TagBrowseDto {
            tag: selected.map(String::from),
            tags: tags.into_iter().map(Into::into).collect(),
            stores: stores.into_iter().map(Into::into).collect(),
        })
    }
}
