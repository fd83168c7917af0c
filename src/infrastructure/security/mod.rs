pub mod password;
pub mod reset_token;

pub use password::Argon2PasswordHasher;
pub use reset_token::HexResetTokenSource;
