mod get_by_slug;
mod hearts;
mod list;
mod near;
mod search;
mod service;
mod tags;
mod top;

pub use list::STORES_PER_PAGE;
pub use service::StoreQueryService;
