mod create;
mod service;
mod update;

pub use create::{CreateStoreCommand, CreateStoreCommandBuilder};
pub use service::StoreCommandService;
pub use update::UpdateStoreCommand;
