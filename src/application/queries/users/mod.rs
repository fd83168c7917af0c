mod account;
mod service;

pub use service::UserQueryService;
