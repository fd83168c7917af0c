// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::store::StoreId;
use crate::domain::user::{
    DisplayName, EmailAddress, NewUser, PasswordHash, PasswordReset, ResetChange, ResetToken,
    User, UserId, UserRepository, UserUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "u.id, u.email, u.name, u.password_hash, u.reset_token, \
     u.reset_expires_at, u.created_at, \
     COALESCE(array_agg(h.store_id ORDER BY h.store_id) \
         FILTER (WHERE h.store_id IS NOT NULL), '{}') AS hearts";

const USER_JOIN: &str = "FROM users u LEFT JOIN user_hearts h ON h.user_id = u.id";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: String,
    password_hash: String,
    reset_token: Option<String>,
    reset_expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    hearts: Vec<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let reset = match (row.reset_token, row.reset_expires_at) {
            (Some(token), Some(expires_at)) => {
                Some(PasswordReset::new(ResetToken::new(token)?, expires_at))
            }
            _ => None,
        };
        let hearts = row
            .hearts
            .into_iter()
            .map(StoreId::new)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(User {
            id: UserId::new(row.id)?,
            email: EmailAddress::new(row.email)?,
            name: DisplayName::new(row.name)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            reset,
            hearts,
            created_at: row.created_at,
        })
    }
}

impl PostgresUserRepository {
    async fn fetch_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} {USER_JOIN} WHERE u.id = $1 GROUP BY u.id");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(User::try_from).transpose()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            email,
            name,
            password_hash,
            created_at,
        } = new_user;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (email, name, password_hash, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(email.as_str())
        .bind(name.as_str())
        .bind(password_hash.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted user vanished".into()))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.fetch_by_id(i64::from(id)).await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} {USER_JOIN} WHERE u.email = $1 GROUP BY u.id");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(User::try_from).transpose()
    }

    async fn find_by_reset_token(
        &self,
        token: &ResetToken,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} {USER_JOIN}
             WHERE u.reset_token = $1 AND u.reset_expires_at > $2
             GROUP BY u.id"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(token.as_str())
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(User::try_from).transpose()
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let id = i64::from(update.id);

        let (touch_reset, reset_token, reset_expires_at) = match &update.reset {
            Some(ResetChange::Set(reset)) => (
                true,
                Some(reset.token.as_str().to_owned()),
                Some(reset.expires_at),
            ),
            Some(ResetChange::Clear) => (true, None, None),
            None => (false, None, None),
        };

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Account fields and the reset ticket change in one statement; the
        // reset-redemption path relies on this being a single write.
        let affected = sqlx::query(
            "UPDATE users SET
                 email = COALESCE($2, email),
                 name = COALESCE($3, name),
                 password_hash = COALESCE($4, password_hash),
                 reset_token = CASE WHEN $5 THEN $6 ELSE reset_token END,
                 reset_expires_at = CASE WHEN $5 THEN $7 ELSE reset_expires_at END
             WHERE id = $1",
        )
        .bind(id)
        .bind(update.email.as_ref().map(EmailAddress::as_str))
        .bind(update.name.as_ref().map(DisplayName::as_str))
        .bind(update.password_hash.as_ref().map(PasswordHash::as_str))
        .bind(touch_reset)
        .bind(reset_token)
        .bind(reset_expires_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .rows_affected();

        if affected == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }

        if let Some(hearts) = &update.hearts {
            sqlx::query("DELETE FROM user_hearts WHERE user_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            for store_id in hearts {
                sqlx::query("INSERT INTO user_hearts (user_id, store_id) VALUES ($1, $2)")
                    .bind(id)
                    .bind(i64::from(*store_id))
                    .execute(&mut *tx)
                    .await
                    .map_err(map_sqlx)?;
            }
        }

        tx.commit().await.map_err(map_sqlx)?;

        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }
}
