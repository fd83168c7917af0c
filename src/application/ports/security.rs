// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Source of opaque password-reset tokens. Implementations must draw at
/// least 20 bytes of cryptographic entropy per token.
pub trait ResetTokenSource: Send + Sync {
    fn generate(&self) -> String;
}
