use std::sync::Arc;

use centime_lib::auth::jwt::JWTAuth;
use centime_lib::user::UserId;
use rstest::*;
use tracing::info;
use tracing::Level;
use uuid::Uuid;

use centime_repo::category_repo::CategoryRepo;
use centime_repo::transaction_repo::TransactionRepo;
use centime_repo::user_repo::{NewUser, UserRepo};
use centime_repo::HealthCheck;

pub mod mock;

pub type Repos = (
    Arc<dyn TransactionRepo>,
    Arc<dyn CategoryRepo>,
    Arc<dyn UserRepo>,
    Arc<dyn HealthCheck>,
);

macro_rules! build_app {
    ($repos:ident, $user_id:expr) => {{
        let (transaction_repo, category_repo, user_repo, health_check) = $repos.clone();
        let app = App::new()
            .app_data(Data::new(transaction_repo))
            .app_data(Data::new(category_repo))
            .app_data(Data::new(user_repo))
            .app_data(Data::new(health_check))
            .wrap(centime_lib::tracing::create_middleware())
            .configure(centime_lib::public_service(true))
            .service(
                centime_lib::protected_service().wrap(MockAuthentication { user_id: $user_id }),
            );
        tracing::info!("Built app");
        app
    }};
    ($repos:ident, $jwt_auth:ident, $user_id:expr) => {{
        let (transaction_repo, category_repo, user_repo, health_check) = $repos.clone();
        let app = App::new()
            .app_data($jwt_auth.clone())
            .app_data(Data::new(transaction_repo))
            .app_data(Data::new(category_repo))
            .app_data(Data::new(user_repo))
            .app_data(Data::new(health_check))
            .wrap(centime_lib::tracing::create_middleware())
            .configure(centime_lib::public_service(true))
            .service(
                centime_lib::protected_service().wrap(MockAuthentication { user_id: $user_id }),
            );
        tracing::info!("Built app");
        app
    }};
}

macro_rules! create_deposit {
    (&$service:ident, $deposit:ident) => {{
        let request = TestRequest::post()
            .uri("/deposit")
            .set_json(&$deposit)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert!(
            response.status().is_success(),
            "Got {} response when creating deposit",
            response.status()
        );
        test::read_body_json(response).await
    }};
}

pub struct TestUser {
    pub user_id: UserId,
    pub email: String,
    pub password: String,
}

impl TestUser {
    pub async fn new(user_repo: &Arc<dyn UserRepo>) -> TestUser {
        let tag = Uuid::new_v4().simple().to_string();
        let username = format!("user-{}", &tag[..8]);
        let email = format!("{}@example.com", &tag[..8]);
        let password = "pass".to_string();
        let user = user_repo
            .create_user(NewUser::new(
                username,
                email,
                centime_lib::auth::password::encode_password(password.clone()).unwrap(),
            ))
            .await
            .unwrap();
        info!(user_id = user.id, "Created user");
        TestUser {
            user_id: user.id,
            email: user.email,
            password,
        }
    }
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repos() -> Repos {
    centime_repo::mem_repo::create_repos()
}

#[fixture]
pub fn jwt_auth() -> JWTAuth {
    JWTAuth::from_secret(b"centime-test-secret".to_vec())
}
