pub mod generator;

use std::sync::Arc;

use centime_repo::category_repo::CategoryRepo;
use centime_repo::transaction_repo::TransactionRepo;
use centime_repo::user_repo::{NewUser, UserRepo};
use centime_repo::HealthCheck;
use uuid::Uuid;

#[derive(Debug)]
pub enum RepoType {
    Sqlite,
    Mem,
}

pub type Repos = (
    Arc<dyn TransactionRepo>,
    Arc<dyn CategoryRepo>,
    Arc<dyn UserRepo>,
    Arc<dyn HealthCheck>,
);

pub async fn build_repos(repo_type: RepoType) -> Repos {
    match repo_type {
        // Pool size 1: every connection to "sqlite::memory:" opens its own database.
        RepoType::Sqlite => centime_repo::sqlite_repo::create_repos("sqlite::memory:", 1)
            .await
            .unwrap(),
        RepoType::Mem => centime_repo::mem_repo::create_repos(),
    }
}

#[allow(dead_code)]
pub async fn create_user(user_repo: &Arc<dyn UserRepo>) -> i64 {
    let suffix = Uuid::new_v4().simple().to_string();
    let new_user = NewUser::new(
        format!("test-user-{}", &suffix[..8]),
        format!("{}@example.com", &suffix[..8]),
        "not a real hash".to_owned(),
    );
    user_repo.create_user(new_user).await.unwrap().id
}
