use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use async_trait::async_trait;

use crate::category_repo::CategoryRepoError::{
    CategoryAlreadyExists, CategoryNameNotFound, CategoryNotFound,
};
use crate::category_repo::{Category, CategoryRepo, CategoryRepoError, DEFAULT_CATEGORIES};

struct State {
    categories: Vec<Category>,
    next_id: i64,
}

pub struct MemCategoryRepo {
    state: RwLock<State>,
}

impl MemCategoryRepo {
    pub fn new() -> MemCategoryRepo {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, name)| Category::new(i as i64 + 1, name.to_string()))
            .collect::<Vec<Category>>();
        let next_id = categories.len() as i64 + 1;

        let state = State {
            categories,
            next_id,
        };
        MemCategoryRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

#[async_trait]
impl CategoryRepo for MemCategoryRepo {
    async fn create_category(&self, name: &str) -> Result<Category, CategoryRepoError> {
        let mut write_guard = self.write_lock()?;

        if write_guard.categories.iter().any(|c| c.name == name) {
            return Err(CategoryAlreadyExists(name.to_owned()));
        }

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let category = Category::new(id, name.to_owned());
        write_guard.categories.push(category.clone());

        Ok(category)
    }

    async fn get_category(&self, category_id: i64) -> Result<Category, CategoryRepoError> {
        let read_guard = self.read_lock()?;

        let Some(category) = read_guard.categories.iter().find(|c| c.id == category_id) else {
            return Err(CategoryNotFound(category_id));
        };
        Ok(category.clone())
    }

    async fn get_category_by_name(&self, name: &str) -> Result<Category, CategoryRepoError> {
        let read_guard = self.read_lock()?;

        let Some(category) = read_guard.categories.iter().find(|c| c.name == name) else {
            return Err(CategoryNameNotFound(name.to_owned()));
        };
        Ok(category.clone())
    }

    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryRepoError> {
        let read_guard = self.read_lock()?;

        let mut categories = read_guard.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }
}
