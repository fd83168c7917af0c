// src/domain/review/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(pub i64);

impl ReviewId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("review id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ReviewId> for i64 {
    fn from(value: ReviewId) -> Self {
        value.0
    }
}

/// Star rating, 1 through 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(i16);

impl Rating {
    pub fn new(value: i16) -> DomainResult<Self> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::Validation(
                "rating must be between 1 and 5".into(),
            ))
        }
    }

    pub fn value(self) -> i16 {
        self.0
    }
}

impl From<Rating> for i16 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewText(String);

impl ReviewText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "your review must have text".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReviewText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ReviewText> for String {
    fn from(value: ReviewText) -> Self {
        value.0
    }
}
