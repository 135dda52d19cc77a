use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use centime_repo::HealthCheck;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "centime",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[get("/health")]
pub async fn health(health_check: web::Data<Arc<dyn HealthCheck>>) -> impl Responder {
    if health_check.check().await {
        HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
    } else {
        HttpResponse::ServiceUnavailable().json(serde_json::json!({ "status": "unavailable" }))
    }
}
