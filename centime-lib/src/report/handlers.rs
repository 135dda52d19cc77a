use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use centime_repo::category_repo::CategoryRepo;
use centime_repo::transaction_repo::TransactionRepo;

use crate::error::HandlerError;
use crate::report::{MonthlyExpenses, NetIncome};
use crate::user::UserId;

#[get("/net_income")]
pub async fn net_income(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    user_id: web::ReqData<UserId>,
) -> Result<impl Responder, HandlerError> {
    let net_income = transaction_repo.net_income(user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(NetIncome { net_income }))
}

#[get("/expenses/{month}/{year}")]
pub async fn monthly_expenses(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    user_id: web::ReqData<UserId>,
    path: web::Path<(u32, i32)>,
) -> Result<impl Responder, HandlerError> {
    let (month, year) = path.into_inner();
    let total = transaction_repo
        .monthly_expenses(user_id.into_inner(), month, year)
        .await?;
    Ok(HttpResponse::Ok().json(MonthlyExpenses { month, year, total }))
}

#[get("/by_category/{category_id}")]
pub async fn expenses_by_category(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    user_id: web::ReqData<UserId>,
    path: web::Path<i64>,
) -> Result<impl Responder, HandlerError> {
    let category = category_repo.get_category(path.into_inner()).await?;
    let expenses = transaction_repo
        .expenses_by_category(user_id.into_inner(), category.id)
        .await?;
    Ok(HttpResponse::Ok().json(expenses))
}
