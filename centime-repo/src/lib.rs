use async_trait::async_trait;

pub mod category_repo;
pub mod money;
pub mod transaction_repo;
pub mod user_repo;

// implementation modules
pub mod mem_repo;
pub mod sqlite_repo;

#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn check(&self) -> bool;
}
