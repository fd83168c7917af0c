pub mod errors;
pub mod review;
pub mod store;
pub mod user;
