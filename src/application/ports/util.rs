// src/application/ports/util.rs
/// Turns a store name into its URL-safe slug base. Uniqueness is not this
/// port's concern; `StoreSlugService` adds the numbered suffix.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
