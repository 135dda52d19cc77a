use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use centime_repo::category_repo::CategoryRepo;
use tracing::info;

use crate::category::NewCategory;
use crate::error::HandlerError;

#[post("/add_category")]
pub async fn add_category(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    new_category: web::Json<NewCategory>,
) -> Result<impl Responder, HandlerError> {
    let new_category = new_category.into_inner();
    new_category.validate()?;

    let category = category_repo.create_category(&new_category.name).await?;
    info!(category_id = category.id, "Created category");

    Ok(HttpResponse::Ok().json(category))
}

#[get("/categories")]
pub async fn get_all_categories(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
) -> Result<impl Responder, HandlerError> {
    let categories = category_repo.get_all_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}
