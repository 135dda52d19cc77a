use anyhow::Context;
use async_trait::async_trait;
use sqlx::{query, query_as, FromRow, Pool, Sqlite};
use tracing::instrument;

use crate::category_repo::{Category, CategoryRepo, CategoryRepoError};
use crate::sqlite_repo::is_unique_violation;

pub struct SqliteCategoryRepo {
    pool: Pool<Sqlite>,
}

impl SqliteCategoryRepo {
    pub fn new(pool: Pool<Sqlite>) -> SqliteCategoryRepo {
        SqliteCategoryRepo { pool }
    }
}

#[derive(FromRow)]
struct CategoryEntry {
    id: i64,
    name: String,
}

impl From<CategoryEntry> for Category {
    fn from(entry: CategoryEntry) -> Self {
        Category::new(entry.id, entry.name)
    }
}

#[async_trait]
impl CategoryRepo for SqliteCategoryRepo {
    #[instrument(skip(self))]
    async fn create_category(&self, name: &str) -> Result<Category, CategoryRepoError> {
        let result = query("INSERT INTO categories (name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await;

        match result {
            Ok(result) => Ok(Category::new(result.last_insert_rowid(), name.to_owned())),
            Err(e) if is_unique_violation(&e) => {
                Err(CategoryRepoError::CategoryAlreadyExists(name.to_owned()))
            }
            Err(e) => Err(CategoryRepoError::Other(
                anyhow::Error::new(e).context(format!("Unable to create category {}", name)),
            )),
        }
    }

    #[instrument(skip(self))]
    async fn get_category(&self, category_id: i64) -> Result<Category, CategoryRepoError> {
        let category: Option<CategoryEntry> =
            query_as::<_, CategoryEntry>("SELECT * FROM categories WHERE id = ?1")
                .bind(category_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get category {}", category_id))?;
        category
            .map(Category::from)
            .ok_or(CategoryRepoError::CategoryNotFound(category_id))
    }

    #[instrument(skip(self))]
    async fn get_category_by_name(&self, name: &str) -> Result<Category, CategoryRepoError> {
        let category: Option<CategoryEntry> =
            query_as::<_, CategoryEntry>("SELECT * FROM categories WHERE name = ?1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get category {}", name))?;
        category
            .map(Category::from)
            .ok_or_else(|| CategoryRepoError::CategoryNameNotFound(name.to_owned()))
    }

    #[instrument(skip(self))]
    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryRepoError> {
        let categories: Vec<CategoryEntry> =
            query_as::<_, CategoryEntry>("SELECT * FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .context("Unable to get categories")?;
        Ok(categories.into_iter().map(Category::from).collect())
    }
}
