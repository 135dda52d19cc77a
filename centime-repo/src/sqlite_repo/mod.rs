use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{query, query_scalar, Executor, Pool, Sqlite};

use crate::category_repo::{CategoryRepo, DEFAULT_CATEGORIES};
use crate::sqlite_repo::category_repo::SqliteCategoryRepo;
use crate::sqlite_repo::transaction_repo::SqliteTransactionRepo;
use crate::sqlite_repo::user_repo::SqliteUserRepo;
use crate::transaction_repo::TransactionRepo;
use crate::user_repo::UserRepo;
use crate::HealthCheck;

mod category_repo;
mod transaction_repo;
mod user_repo;

pub async fn create_repos(
    database_url: &str,
    max_pool_size: u32,
) -> anyhow::Result<(
    Arc<dyn TransactionRepo>,
    Arc<dyn CategoryRepo>,
    Arc<dyn UserRepo>,
    Arc<dyn HealthCheck>,
)> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database URL {}", database_url))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_pool_size)
        .connect_with(options)
        .await
        .context("Unable to connect to database")?;

    install_schema(&pool).await?;
    seed_default_categories(&pool).await?;

    let transaction_repo = SqliteTransactionRepo::new(pool.clone());
    let category_repo = SqliteCategoryRepo::new(pool.clone());
    let user_repo = SqliteUserRepo::new(pool.clone());
    let health_check = SqliteHealthCheck::new(pool);

    Ok((
        Arc::new(transaction_repo),
        Arc::new(category_repo),
        Arc::new(user_repo),
        Arc::new(health_check),
    ))
}

async fn install_schema(pool: &Pool<Sqlite>) -> anyhow::Result<()> {
    pool.execute(include_str!("../../db/schema.sql"))
        .await
        .context("Unable to install database schema")?;
    Ok(())
}

async fn seed_default_categories(pool: &Pool<Sqlite>) -> anyhow::Result<()> {
    for name in DEFAULT_CATEGORIES {
        query("INSERT OR IGNORE INTO categories (name) VALUES (?1)")
            .bind(name)
            .execute(pool)
            .await
            .with_context(|| format!("Unable to seed category {}", name))?;
    }
    Ok(())
}

pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_error) = error {
        db_error.kind() == sqlx::error::ErrorKind::UniqueViolation
    } else {
        false
    }
}

struct SqliteHealthCheck {
    pool: Pool<Sqlite>,
}

impl SqliteHealthCheck {
    fn new(pool: Pool<Sqlite>) -> SqliteHealthCheck {
        SqliteHealthCheck { pool }
    }
}

#[async_trait]
impl HealthCheck for SqliteHealthCheck {
    async fn check(&self) -> bool {
        query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }
}
