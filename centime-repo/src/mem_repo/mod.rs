use std::sync::Arc;

use async_trait::async_trait;

use crate::category_repo::CategoryRepo;
use crate::transaction_repo::TransactionRepo;
use crate::user_repo::UserRepo;
use crate::HealthCheck;

mod category_repo;
mod transaction_repo;
mod user_repo;

pub fn create_repos() -> (
    Arc<dyn TransactionRepo>,
    Arc<dyn CategoryRepo>,
    Arc<dyn UserRepo>,
    Arc<dyn HealthCheck>,
) {
    let transaction_repo = transaction_repo::MemTransactionRepo::new();
    let category_repo = category_repo::MemCategoryRepo::new();
    let user_repo = user_repo::MemUserRepo::new();

    (
        Arc::new(transaction_repo),
        Arc::new(category_repo),
        Arc::new(user_repo),
        Arc::new(MemHealthCheck),
    )
}

struct MemHealthCheck;

#[async_trait]
impl HealthCheck for MemHealthCheck {
    async fn check(&self) -> bool {
        true
    }
}
