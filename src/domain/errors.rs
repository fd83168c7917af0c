// src/domain/errors.rs
//! Failure taxonomy for the store/account domain. Expired reset tickets are
//! deliberately not a variant of their own: the lookup treats them as a
//! plain miss so callers cannot tell expiry from a bogus token.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object or invariant check rejected the input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A uniqueness rule was violated, e.g. a duplicate account email.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// The storage collaborator failed; not user-actionable.
    #[error("persistence error: {0}")]
    Persistence(String),
}
