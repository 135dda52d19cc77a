use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{query, query_as, FromRow, Pool, Sqlite};
use tracing::instrument;

use crate::sqlite_repo::is_unique_violation;
use crate::user_repo::{NewUser, User, UserRepo, UserRepoError};

pub struct SqliteUserRepo {
    pool: Pool<Sqlite>,
}

impl SqliteUserRepo {
    pub fn new(pool: Pool<Sqlite>) -> SqliteUserRepo {
        SqliteUserRepo { pool }
    }
}

#[derive(FromRow)]
struct UserEntry {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<UserEntry> for User {
    fn from(entry: UserEntry) -> Self {
        User::new(
            entry.id,
            entry.username,
            entry.email,
            entry.password_hash,
            entry.created_at,
        )
    }
}

#[async_trait]
impl UserRepo for SqliteUserRepo {
    #[instrument(skip(self, new_user))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let created_at = Utc::now();
        let result = query(
            "INSERT INTO users (username, email, password_hash, created_at) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(result) => Ok(User::new(
                result.last_insert_rowid(),
                new_user.username,
                new_user.email,
                new_user.password_hash,
                created_at,
            )),
            Err(e) if is_unique_violation(&e) => Err(UserRepoError::UserAlreadyExists),
            Err(e) => Err(UserRepoError::Other(
                anyhow::Error::new(e)
                    .context(format!("Unable to create user {}", new_user.username)),
            )),
        }
    }

    #[instrument(skip(self))]
    async fn get_user(&self, user_id: i64) -> Result<User, UserRepoError> {
        let user: Option<UserEntry> =
            query_as::<_, UserEntry>("SELECT * FROM users WHERE id = ?1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get user {}", user_id))?;
        user.map(User::from)
            .ok_or(UserRepoError::UserNotFound(user_id))
    }

    #[instrument(skip(self))]
    async fn get_user_by_email(&self, email: &str) -> Result<User, UserRepoError> {
        let user: Option<UserEntry> =
            query_as::<_, UserEntry>("SELECT * FROM users WHERE email = ?1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get user with email {}", email))?;
        user.map(User::from)
            .ok_or_else(|| UserRepoError::EmailNotFound(email.to_owned()))
    }
}
