use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[async_trait]
pub trait UserRepo: Sync + Send {
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError>;
    async fn get_user(&self, user_id: i64) -> Result<User, UserRepoError>;
    async fn get_user_by_email(&self, email: &str) -> Result<User, UserRepoError>;
}

#[derive(Clone, PartialEq, Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub const fn new(
        id: i64,
        username: String,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> User {
        User {
            id,
            username,
            email,
            password_hash,
            created_at,
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub const fn new(username: String, email: String, password_hash: String) -> NewUser {
        NewUser {
            username,
            email,
            password_hash,
        }
    }
}

#[derive(Error, Debug)]
pub enum UserRepoError {
    #[error("User {0} not found")]
    UserNotFound(i64),
    #[error("User with email {0} not found")]
    EmailNotFound(String),
    #[error("A user with that username or email already exists")]
    UserAlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
