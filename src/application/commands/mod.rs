pub mod reviews;
pub mod stores;
pub mod users;
