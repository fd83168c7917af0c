use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub gravatar_url: String,
    pub hearts: Vec<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let gravatar_url = gravatar_url(user.email.as_str());
        Self {
            id: user.id.into(),
            email: user.email.into(),
            name: user.name.into(),
            gravatar_url,
            hearts: user.hearts.into_iter().map(i64::from).collect(),
            created_at: user.created_at,
        }
    }
}

/// Gravatar avatar URL for an address, using the SHA-256 form of the API.
/// The address is already normalised by `EmailAddress`.
fn gravatar_url(email: &str) -> String {
    let hash = hex::encode(Sha256::digest(email.as_bytes()));
    format!("https://gravatar.com/avatar/{hash}?s=200")
}

#[cfg(test)]
mod tests {
    use super::gravatar_url;

    #[test]
    fn gravatar_url_is_hex_hashed() {
        let url = gravatar_url("peace@example.com");
        assert!(url.starts_with("https://gravatar.com/avatar/"));
        assert!(url.ends_with("?s=200"));
        // 64 hex chars between prefix and query
        let hash = &url["https://gravatar.com/avatar/".len()..url.len() - "?s=200".len()];
        assert_eq!(hash.len(), 64);
        assert!(hash.bytes().all(|b| b.is_ascii_hexdigit()));
    }
}
