// src/domain/store/services/mod.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::store::repository::StoreReadRepository;
use crate::domain::store::value_objects::{StoreName, StoreSlug};

/// Domain service producing unique slugs for stores.
///
/// Invoked by the write path only when the name is new or changed; the
/// lookup collaborator is injected rather than reached through a
/// persistence hook. Concurrent creation of identically named stores is
/// not serialised, so two simultaneous inserts can still compute the same
/// suffix.
pub struct StoreSlugService {
    read_repo: Arc<dyn StoreReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl StoreSlugService {
    pub fn new(read_repo: Arc<dyn StoreReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Derive a unique slug for `name`. When the record already carries a
    /// slug (`current`) that fits the new base, it is kept as-is so that
    /// re-saving never renumbers an existing store.
    pub async fn generate_unique_slug(
        &self,
        name: &StoreName,
        current: Option<&StoreSlug>,
    ) -> DomainResult<StoreSlug> {
        let base = self.generator.slugify(name.as_str());
        let base = if base.is_empty() {
            format!("store-{}", Utc::now().timestamp())
        } else {
            base
        };

        if let Some(current) = current {
            if matches_base(&base, current.as_str()) {
                return Ok(current.clone());
            }
        }

        let taken = self.read_repo.count_slug_matches(&base).await?;
        if taken == 0 {
            StoreSlug::new(base)
        } else {
            StoreSlug::new(format!("{}-{}", base, taken + 1))
        }
    }
}

/// Whether `slug` matches `^base(-[0-9]+)?$`, case-insensitively.
pub(crate) fn matches_base(base: &str, slug: &str) -> bool {
    let slug = slug.to_lowercase();
    let base = base.to_lowercase();
    if slug == base {
        return true;
    }
    slug.strip_prefix(&base)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::matches_base;

    #[test]
    fn base_matches_itself_and_numbered_variants() {
        assert!(matches_base("coffee-shop", "coffee-shop"));
        assert!(matches_base("coffee-shop", "coffee-shop-2"));
        assert!(matches_base("coffee-shop", "Coffee-Shop-10"));
    }

    #[test]
    fn unrelated_and_malformed_suffixes_do_not_match() {
        assert!(!matches_base("coffee-shop", "coffee-shop-deluxe"));
        assert!(!matches_base("coffee-shop", "coffee-shop-"));
        assert!(!matches_base("coffee-shop", "coffee-shop-2a"));
        assert!(!matches_base("coffee-shop", "coffee"));
    }
}
