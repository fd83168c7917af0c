// tests/support/fakes.rs
//! In-memory stand-ins for the persistence and infrastructure ports.
//! Behaviour mirrors the Postgres adapters closely enough for the service
//! tests: unique emails, anchored slug counting, expiry-aware token lookup.

use std::collections::{HashMap, VecDeque};
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use store_directory::application::error::{ApplicationError, ApplicationResult};
use store_directory::application::ports::mail::{MailMessage, MailSender};
use store_directory::application::ports::security::{PasswordHasher, ResetTokenSource};
use store_directory::application::ports::time::Clock;
use store_directory::application::ports::util::SlugGenerator;
use store_directory::domain::errors::{DomainError, DomainResult};
use store_directory::domain::review::{NewReview, Review, ReviewId, ReviewRepository};
use store_directory::domain::store::{
    NewStore, Store, StoreId, StoreReadRepository, StoreSlug, StoreUpdate, StoreWriteRepository,
    Tag, TagCount, TopStore,
};
use store_directory::domain::user::{
    EmailAddress, NewUser, ResetChange, ResetToken, User, UserId, UserRepository, UserUpdate,
};

fn poisoned() -> DomainError {
    DomainError::Persistence("lock poisoned".into())
}

// ---------------------------------------------------------------- users

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.users.lock().ok()?.get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().map_err(|_| poisoned())?;
        if users.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id: UserId(id),
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            reset: None,
            hearts: Vec::new(),
            created_at: new_user.created_at,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.users.lock().map_err(|_| poisoned())?;
        Ok(users.get(&i64::from(id)).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let users = self.users.lock().map_err(|_| poisoned())?;
        Ok(users.values().find(|u| u.email == *email).cloned())
    }

    async fn find_by_reset_token(
        &self,
        token: &ResetToken,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<User>> {
        let users = self.users.lock().map_err(|_| poisoned())?;
        Ok(users
            .values()
            .find(|u| {
                u.reset
                    .as_ref()
                    .is_some_and(|reset| reset.token == *token && reset.is_valid_at(now))
            })
            .cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().map_err(|_| poisoned())?;
        let user = users
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        match update.reset {
            Some(ResetChange::Set(reset)) => user.reset = Some(reset),
            Some(ResetChange::Clear) => user.reset = None,
            None => {}
        }
        if let Some(hearts) = update.hearts {
            user.hearts = hearts;
        }
        Ok(user.clone())
    }
}

// --------------------------------------------------------------- stores

/// Backs both the read and the write side, plus a rating table feeding
/// `top_rated` the way the SQL aggregation would.
#[derive(Default)]
pub struct InMemoryStoreRepo {
    stores: Mutex<HashMap<i64, Store>>,
    ratings: Mutex<HashMap<i64, Vec<i16>>>,
    next_id: AtomicI64,
}

impl InMemoryStoreRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: i64) -> Option<Store> {
        self.stores.lock().ok()?.get(&id).cloned()
    }

    /// Record a review rating for the top-rated aggregation.
    pub fn add_rating(&self, store_id: i64, rating: i16) {
        if let Ok(mut ratings) = self.ratings.lock() {
            ratings.entry(store_id).or_default().push(rating);
        }
    }

    fn sorted_newest_first(stores: &HashMap<i64, Store>) -> Vec<Store> {
        let mut all: Vec<Store> = stores.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        all
    }
}

/// `^base(-[0-9]+)?$`, case-insensitively, like the SQL regex.
fn slug_matches_base(base: &str, slug: &str) -> bool {
    let base = base.to_lowercase();
    let slug = slug.to_lowercase();
    if slug == base {
        return true;
    }
    slug.strip_prefix(&base)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn haversine_m(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    const EARTH_RADIUS_M: f64 = 6_371_000.0;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

#[async_trait]
impl StoreWriteRepository for InMemoryStoreRepo {
    async fn insert(&self, store: NewStore) -> DomainResult<Store> {
        let mut stores = self.stores.lock().map_err(|_| poisoned())?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let store = Store {
            id: StoreId(id),
            name: store.name,
            slug: store.slug,
            description: store.description,
            tags: store.tags,
            location: store.location,
            photo: store.photo,
            author_id: store.author_id,
            created_at: store.created_at,
        };
        stores.insert(id, store.clone());
        Ok(store)
    }

    async fn update(&self, update: StoreUpdate) -> DomainResult<Store> {
        let mut stores = self.stores.lock().map_err(|_| poisoned())?;
        let store = stores
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("store not found".into()))?;
        if let Some(name) = update.name {
            store.name = name;
        }
        if let Some(slug) = update.slug {
            store.slug = slug;
        }
        if let Some(description) = update.description {
            store.description = description;
        }
        if let Some(tags) = update.tags {
            store.tags = tags;
        }
        if let Some(location) = update.location {
            store.location = location;
        }
        if let Some(photo) = update.photo {
            store.photo = photo;
        }
        Ok(store.clone())
    }
}

#[async_trait]
impl StoreReadRepository for InMemoryStoreRepo {
    async fn find_by_id(&self, id: StoreId) -> DomainResult<Option<Store>> {
        let stores = self.stores.lock().map_err(|_| poisoned())?;
        Ok(stores.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &StoreSlug) -> DomainResult<Option<Store>> {
        let stores = self.stores.lock().map_err(|_| poisoned())?;
        Ok(stores.values().find(|s| s.slug == *slug).cloned())
    }

    async fn find_by_ids(&self, ids: &[StoreId]) -> DomainResult<Vec<Store>> {
        let stores = self.stores.lock().map_err(|_| poisoned())?;
        Ok(ids
            .iter()
            .filter_map(|id| stores.get(&i64::from(*id)).cloned())
            .collect())
    }

    async fn count_slug_matches(&self, base: &str) -> DomainResult<u64> {
        let stores = self.stores.lock().map_err(|_| poisoned())?;
        Ok(stores
            .values()
            .filter(|s| slug_matches_base(base, s.slug.as_str()))
            .count() as u64)
    }

    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Store>, u64)> {
        let stores = self.stores.lock().map_err(|_| poisoned())?;
        let all = Self::sorted_newest_first(&stores);
        let total = all.len() as u64;
        let page = all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn find_by_tag(&self, tag: Option<&Tag>) -> DomainResult<Vec<Store>> {
        let stores = self.stores.lock().map_err(|_| poisoned())?;
        let mut matched: Vec<Store> = stores
            .values()
            .filter(|s| match tag {
                Some(tag) => s.tags.contains(tag),
                None => !s.tags.is_empty(),
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn search(&self, query: &str, limit: u32) -> DomainResult<Vec<Store>> {
        let stores = self.stores.lock().map_err(|_| poisoned())?;
        let needle = query.to_lowercase();
        let mut matched: Vec<Store> = stores
            .values()
            .filter(|s| {
                s.name.as_str().to_lowercase().contains(&needle)
                    || s.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched.truncate(limit as usize);
        Ok(matched)
    }

    async fn find_near(
        &self,
        longitude: f64,
        latitude: f64,
        max_distance_m: f64,
        limit: u32,
    ) -> DomainResult<Vec<Store>> {
        let stores = self.stores.lock().map_err(|_| poisoned())?;
        let mut within: Vec<(f64, Store)> = stores
            .values()
            .map(|s| {
                let d = haversine_m(
                    longitude,
                    latitude,
                    s.location.longitude,
                    s.location.latitude,
                );
                (d, s.clone())
            })
            .filter(|(d, _)| *d <= max_distance_m)
            .collect();
        within.sort_by(|a, b| a.0.total_cmp(&b.0));
        within.truncate(limit as usize);
        Ok(within.into_iter().map(|(_, s)| s).collect())
    }

    async fn tag_counts(&self) -> DomainResult<Vec<TagCount>> {
        let stores = self.stores.lock().map_err(|_| poisoned())?;
        let mut counts: HashMap<Tag, u64> = HashMap::new();
        for store in stores.values() {
            for tag in &store.tags {
                *counts.entry(tag.clone()).or_default() += 1;
            }
        }
        let mut counts: Vec<TagCount> = counts
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.tag.as_str().cmp(b.tag.as_str())));
        Ok(counts)
    }

    async fn top_rated(&self, limit: u32) -> DomainResult<Vec<TopStore>> {
        let stores = self.stores.lock().map_err(|_| poisoned())?;
        let ratings = self.ratings.lock().map_err(|_| poisoned())?;
        let mut top: Vec<TopStore> = ratings
            .iter()
            .filter(|(_, rs)| rs.len() >= 2)
            .filter_map(|(store_id, rs)| {
                let store = stores.get(store_id)?;
                let sum: i64 = rs.iter().map(|r| i64::from(*r)).sum();
                Some(TopStore {
                    id: store.id,
                    name: store.name.clone(),
                    slug: store.slug.clone(),
                    photo: store.photo.clone(),
                    average_rating: sum as f64 / rs.len() as f64,
                    review_count: rs.len() as u64,
                })
            })
            .collect();
        top.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
        top.truncate(limit as usize);
        Ok(top)
    }
}

// -------------------------------------------------------------- reviews

#[derive(Default)]
pub struct InMemoryReviewRepo {
    reviews: Mutex<Vec<Review>>,
    next_id: AtomicI64,
}

impl InMemoryReviewRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepo {
    async fn insert(&self, review: NewReview) -> DomainResult<Review> {
        let mut reviews = self.reviews.lock().map_err(|_| poisoned())?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let review = Review {
            id: ReviewId(id),
            store_id: review.store_id,
            author_id: review.author_id,
            text: review.text,
            rating: review.rating,
            created_at: review.created_at,
        };
        reviews.push(review.clone());
        Ok(review)
    }

    async fn list_for_store(&self, store_id: StoreId) -> DomainResult<Vec<Review>> {
        let reviews = self.reviews.lock().map_err(|_| poisoned())?;
        let mut matched: Vec<Review> = reviews
            .iter()
            .filter(|r| r.store_id == store_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }
}

// ---------------------------------------------------------------- ports

/// Reversible "hash" so tests can wire credentials without Argon2.
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Clock pinned to a settable instant.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = now;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.lock().map(|guard| *guard).unwrap_or_else(|_| Utc::now())
    }
}

/// Hands out a preset sequence of tokens, then falls back to numbered ones.
#[derive(Default)]
pub struct SequenceTokenSource {
    tokens: Mutex<VecDeque<String>>,
    fallback: AtomicI64,
}

impl SequenceTokenSource {
    pub fn new(tokens: &[&str]) -> Self {
        Self {
            tokens: Mutex::new(tokens.iter().map(|t| (*t).to_string()).collect()),
            fallback: AtomicI64::new(0),
        }
    }
}

impl ResetTokenSource for SequenceTokenSource {
    fn generate(&self) -> String {
        if let Ok(mut tokens) = self.tokens.lock() {
            if let Some(token) = tokens.pop_front() {
                return token;
            }
        }
        let n = self.fallback.fetch_add(1, Ordering::SeqCst);
        format!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa{n:02}")
    }
}

/// Records outbound mail instead of delivering it.
#[derive(Default)]
pub struct RecordingMailer {
    messages: Mutex<Vec<MailMessage>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<MailMessage> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send(&self, message: MailMessage) -> ApplicationResult<()> {
        self.messages
            .lock()
            .map_err(|_| ApplicationError::infrastructure("lock poisoned"))?
            .push(message);
        Ok(())
    }
}

/// Same slug shape as the production generator, without the dependency on
/// its exact transliteration rules.
pub struct SimpleSlugGenerator;

impl SlugGenerator for SimpleSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut last_dash = true;
        for c in input.chars() {
            if c.is_ascii_alphanumeric() {
                out.push(c.to_ascii_lowercase());
                last_dash = false;
            } else if !last_dash {
                out.push('-');
                last_dash = true;
            }
        }
        while out.ends_with('-') {
            out.pop();
        }
        out
    }
}
