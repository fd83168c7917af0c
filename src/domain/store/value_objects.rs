// src/domain/store/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreId(pub i64);

impl StoreId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("store id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<StoreId> for i64 {
    fn from(value: StoreId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreName(String);

impl StoreName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "please enter a store name".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StoreName> for String {
    fn from(value: StoreName) -> Self {
        value.0
    }
}

/// URL-safe identifier derived from the store name. Never user-supplied;
/// produced by `StoreSlugService` on create and on rename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreSlug(String);

impl StoreSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StoreSlug> for String {
    fn from(value: StoreSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("tag cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}

/// Geographic point plus street address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
    pub address: String,
}

impl Location {
    pub fn new(longitude: f64, latitude: f64, address: impl Into<String>) -> DomainResult<Self> {
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::Validation(
                "longitude must be between -180 and 180".into(),
            ));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::Validation(
                "latitude must be between -90 and 90".into(),
            ));
        }
        let address = address.into().trim().to_string();
        if address.is_empty() {
            return Err(DomainError::Validation(
                "you must supply an address".into(),
            ));
        }
        Ok(Self {
            longitude,
            latitude,
            address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_rejects_out_of_range_coordinates() {
        assert!(Location::new(181.0, 0.0, "somewhere").is_err());
        assert!(Location::new(0.0, -91.0, "somewhere").is_err());
        assert!(Location::new(0.0, 0.0, "   ").is_err());
    }

    #[test]
    fn store_name_is_trimmed() {
        let name = StoreName::new("  Coffee Shop  ").unwrap();
        assert_eq!(name.as_str(), "Coffee Shop");
    }
}
