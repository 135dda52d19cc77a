use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Categories seeded into every fresh repository.
pub const DEFAULT_CATEGORIES: [&str; 5] =
    ["General", "Food", "Transport", "Rent", "Entertainment"];

#[async_trait]
pub trait CategoryRepo: Sync + Send {
    async fn create_category(&self, name: &str) -> Result<Category, CategoryRepoError>;
    async fn get_category(&self, category_id: i64) -> Result<Category, CategoryRepoError>;
    async fn get_category_by_name(&self, name: &str) -> Result<Category, CategoryRepoError>;
    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryRepoError>;
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    pub const fn new(id: i64, name: String) -> Category {
        Category { id, name }
    }
}

#[derive(Error, Debug)]
pub enum CategoryRepoError {
    #[error("Category with id {0} not found")]
    CategoryNotFound(i64),
    #[error("Category {0} not found")]
    CategoryNameNotFound(String),
    #[error("Category {0} already exists")]
    CategoryAlreadyExists(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
