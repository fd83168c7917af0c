pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewStore, Store, StoreUpdate, TagCount, TopStore};
pub use repository::{StoreReadRepository, StoreWriteRepository};
pub use value_objects::{Location, StoreId, StoreName, StoreSlug, Tag};
