#[macro_use]
extern crate actix_web;

use std::sync::Arc;

use actix_web::web;
use actix_web::web::Data;
use actix_web::Scope;
use actix_web_httpauth::middleware::HttpAuthentication;
use centime_repo::category_repo::CategoryRepo;
use centime_repo::transaction_repo::TransactionRepo;
use centime_repo::user_repo::UserRepo;
use centime_repo::HealthCheck;

use crate::auth::jwt::JWTAuth;

pub mod auth;
pub mod category;
pub mod config;
mod error;
pub mod index;
pub mod report;
pub mod tracing;
pub mod transaction;
pub mod user;
mod validate;

/// Routes that need no authentication. Registration is only mounted when signups are enabled,
/// otherwise the route does not exist.
pub fn public_service(signups_enabled: bool) -> impl FnOnce(&mut web::ServiceConfig) {
    move |app| {
        app.service(index::index)
            .service(index::health)
            .service(auth::handlers::login);
        if signups_enabled {
            app.service(auth::handlers::registration);
        }
    }
}

/// Routes that require a bearer token.
pub fn protected_service() -> Scope {
    web::scope("")
        .service(auth::handlers::logout)
        .service(transaction::handlers::deposit)
        .service(category::handlers::add_category)
        .service(category::handlers::get_all_categories)
        .service(report::handlers::net_income)
        .service(report::handlers::monthly_expenses)
        .service(report::handlers::expenses_by_category)
}

pub fn app_config_func(
    jwt_auth: JWTAuth,
    transaction_repo: Arc<dyn TransactionRepo>,
    category_repo: Arc<dyn CategoryRepo>,
    user_repo: Arc<dyn UserRepo>,
    health_check: Arc<dyn HealthCheck>,
    signups_enabled: bool,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |app| {
        let bearer_auth_middleware = HttpAuthentication::bearer(auth::credentials_validator);
        app.app_data(jwt_auth)
            .app_data(Data::new(transaction_repo))
            .app_data(Data::new(category_repo))
            .app_data(Data::new(user_repo))
            .app_data(Data::new(health_check));

        let configure_public = public_service(signups_enabled);
        configure_public(app);

        app.service(protected_service().wrap(bearer_auth_middleware));
    }
}
