pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, ResetChange, User, UserUpdate};
pub use repository::UserRepository;
pub use value_objects::{DisplayName, EmailAddress, PasswordHash, PasswordReset, ResetToken, UserId};
