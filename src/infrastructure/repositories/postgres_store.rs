// src/infrastructure/repositories/postgres_store.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::store::{
    Location, NewStore, Store, StoreId, StoreName, StoreReadRepository, StoreSlug, StoreUpdate,
    StoreWriteRepository, Tag, TagCount, TopStore,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const STORE_COLUMNS: &str =
    "id, name, slug, description, tags, longitude, latitude, address, photo, author_id, created_at";

#[derive(Clone)]
pub struct PostgresStoreWriteRepository {
    pool: PgPool,
}

impl PostgresStoreWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresStoreReadRepository {
    pool: PgPool,
}

impl PostgresStoreReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StoreRow {
    id: i64,
    name: String,
    slug: String,
    description: String,
    tags: Vec<String>,
    longitude: f64,
    latitude: f64,
    address: String,
    photo: Option<String>,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<StoreRow> for Store {
    type Error = DomainError;

    fn try_from(row: StoreRow) -> Result<Self, Self::Error> {
        Ok(Store {
            id: StoreId::new(row.id)?,
            name: StoreName::new(row.name)?,
            slug: StoreSlug::new(row.slug)?,
            description: row.description,
            tags: row
                .tags
                .into_iter()
                .map(Tag::new)
                .collect::<DomainResult<Vec<_>>>()?,
            location: Location::new(row.longitude, row.latitude, row.address)?,
            photo: row.photo,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TopStoreRow {
    id: i64,
    name: String,
    slug: String,
    photo: Option<String>,
    average_rating: f64,
    review_count: i64,
}

impl TryFrom<TopStoreRow> for TopStore {
    type Error = DomainError;

    fn try_from(row: TopStoreRow) -> Result<Self, Self::Error> {
        Ok(TopStore {
            id: StoreId::new(row.id)?,
            name: StoreName::new(row.name)?,
            slug: StoreSlug::new(row.slug)?,
            photo: row.photo,
            average_rating: row.average_rating,
            review_count: row.review_count as u64,
        })
    }
}

#[async_trait]
impl StoreWriteRepository for PostgresStoreWriteRepository {
    async fn insert(&self, store: NewStore) -> DomainResult<Store> {
        let NewStore {
            name,
            slug,
            description,
            tags,
            location,
            photo,
            author_id,
            created_at,
        } = store;

        let tags: Vec<String> = tags.into_iter().map(String::from).collect();

        let sql = format!(
            "INSERT INTO stores
                 (name, slug, description, tags, longitude, latitude, address, photo,
                  author_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {STORE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, StoreRow>(&sql)
            .bind(name.as_str())
            .bind(slug.as_str())
            .bind(description)
            .bind(tags)
            .bind(location.longitude)
            .bind(location.latitude)
            .bind(location.address)
            .bind(photo)
            .bind(i64::from(author_id))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Store::try_from(row)
    }

    async fn update(&self, update: StoreUpdate) -> DomainResult<Store> {
        let StoreUpdate {
            id,
            name,
            slug,
            description,
            tags,
            location,
            photo,
        } = update;

        let tags: Option<Vec<String>> =
            tags.map(|tags| tags.into_iter().map(String::from).collect());
        let (longitude, latitude, address) = match location {
            Some(location) => (
                Some(location.longitude),
                Some(location.latitude),
                Some(location.address),
            ),
            None => (None, None, None),
        };
        let (touch_photo, photo) = match photo {
            Some(photo) => (true, photo),
            None => (false, None),
        };

        let sql = format!(
            "UPDATE stores SET
                 name = COALESCE($2, name),
                 slug = COALESCE($3, slug),
                 description = COALESCE($4, description),
                 tags = COALESCE($5, tags),
                 longitude = COALESCE($6, longitude),
                 latitude = COALESCE($7, latitude),
                 address = COALESCE($8, address),
                 photo = CASE WHEN $9 THEN $10 ELSE photo END
             WHERE id = $1
             RETURNING {STORE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, StoreRow>(&sql)
            .bind(i64::from(id))
            .bind(name.as_ref().map(StoreName::as_str))
            .bind(slug.as_ref().map(StoreSlug::as_str))
            .bind(description)
            .bind(tags)
            .bind(longitude)
            .bind(latitude)
            .bind(address)
            .bind(touch_photo)
            .bind(photo)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("store not found".into()))?;

        Store::try_from(row)
    }
}

#[async_trait]
impl StoreReadRepository for PostgresStoreReadRepository {
    async fn find_by_id(&self, id: StoreId) -> DomainResult<Option<Store>> {
        let sql = format!("SELECT {STORE_COLUMNS} FROM stores WHERE id = $1");
        let row = sqlx::query_as::<_, StoreRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Store::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &StoreSlug) -> DomainResult<Option<Store>> {
        let sql = format!("SELECT {STORE_COLUMNS} FROM stores WHERE slug = $1");
        let row = sqlx::query_as::<_, StoreRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Store::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[StoreId]) -> DomainResult<Vec<Store>> {
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let sql = format!(
            "SELECT {STORE_COLUMNS} FROM stores WHERE id = ANY($1) ORDER BY created_at DESC"
        );
        let rows = sqlx::query_as::<_, StoreRow>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Store::try_from).collect()
    }

    async fn count_slug_matches(&self, base: &str) -> DomainResult<u64> {
        // `base` comes out of the slug generator: lowercase ASCII and
        // hyphens only, so it is safe inside the pattern.
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM stores WHERE slug ~* ('^' || $1 || '(-[0-9]+)?$')",
        )
        .bind(base)
        .fetch_one(&self.pool)
        .await
        .map(|count| count as u64)
        .map_err(map_sqlx)
    }

    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Store>, u64)> {
        let sql = format!(
            "SELECT {STORE_COLUMNS} FROM stores
             ORDER BY created_at DESC
             OFFSET $1 LIMIT $2"
        );
        let rows = sqlx::query_as::<_, StoreRow>(&sql)
            .bind(offset as i64)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM stores")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let stores = rows
            .into_iter()
            .map(Store::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((stores, total as u64))
    }

    async fn find_by_tag(&self, tag: Option<&Tag>) -> DomainResult<Vec<Store>> {
        let rows = match tag {
            Some(tag) => {
                let sql = format!(
                    "SELECT {STORE_COLUMNS} FROM stores
                     WHERE $1 = ANY(tags)
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, StoreRow>(&sql)
                    .bind(tag.as_str())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let sql = format!(
                    "SELECT {STORE_COLUMNS} FROM stores
                     WHERE cardinality(tags) > 0
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, StoreRow>(&sql).fetch_all(&self.pool).await
            }
        }
        .map_err(map_sqlx)?;

        rows.into_iter().map(Store::try_from).collect()
    }

    async fn search(&self, query: &str, limit: u32) -> DomainResult<Vec<Store>> {
        let sql = format!(
            "SELECT {STORE_COLUMNS} FROM stores
             WHERE to_tsvector('english', name || ' ' || description)
                   @@ plainto_tsquery('english', $1)
             ORDER BY ts_rank(to_tsvector('english', name || ' ' || description),
                              plainto_tsquery('english', $1)) DESC
             LIMIT $2"
        );
        let rows = sqlx::query_as::<_, StoreRow>(&sql)
            .bind(query)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Store::try_from).collect()
    }

    async fn find_near(
        &self,
        longitude: f64,
        latitude: f64,
        max_distance_m: f64,
        limit: u32,
    ) -> DomainResult<Vec<Store>> {
        // cube + earthdistance extensions; ll_to_earth takes (lat, lng).
        let sql = format!(
            "SELECT {STORE_COLUMNS} FROM stores
             WHERE earth_box(ll_to_earth($1, $2), $3) @> ll_to_earth(latitude, longitude)
               AND earth_distance(ll_to_earth($1, $2),
                                  ll_to_earth(latitude, longitude)) < $3
             ORDER BY earth_distance(ll_to_earth($1, $2),
                                     ll_to_earth(latitude, longitude))
             LIMIT $4"
        );
        let rows = sqlx::query_as::<_, StoreRow>(&sql)
            .bind(latitude)
            .bind(longitude)
            .bind(max_distance_m)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Store::try_from).collect()
    }

    async fn tag_counts(&self) -> DomainResult<Vec<TagCount>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT tag, COUNT(1) AS count
             FROM stores, unnest(tags) AS tag
             GROUP BY tag
             ORDER BY count DESC, tag",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|(tag, count)| {
                Ok(TagCount {
                    tag: Tag::new(tag)?,
                    count: count as u64,
                })
            })
            .collect()
    }

    async fn top_rated(&self, limit: u32) -> DomainResult<Vec<TopStore>> {
        let rows = sqlx::query_as::<_, TopStoreRow>(
            "SELECT s.id, s.name, s.slug, s.photo,
                    AVG(r.rating)::float8 AS average_rating,
                    COUNT(r.id) AS review_count
             FROM stores s
             JOIN reviews r ON r.store_id = s.id
             GROUP BY s.id, s.name, s.slug, s.photo
             HAVING COUNT(r.id) >= 2
             ORDER BY average_rating DESC
             LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(TopStore::try_from).collect()
    }
}
