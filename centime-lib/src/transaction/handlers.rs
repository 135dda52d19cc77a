use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use centime_repo::category_repo::CategoryRepo;
use centime_repo::transaction_repo::{NewTransaction, TransactionRepo};
use chrono::Utc;

use crate::error::HandlerError;
use crate::transaction::Deposit;
use crate::user::UserId;

#[post("/deposit")]
pub async fn deposit(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    user_id: web::ReqData<UserId>,
    deposit: web::Json<Deposit>,
) -> Result<impl Responder, HandlerError> {
    let deposit = deposit.into_inner();
    deposit.validate()?;

    let category = category_repo
        .get_category_by_name(&deposit.category)
        .await?;
    let date = deposit.date.unwrap_or_else(Utc::now);

    let transaction = transaction_repo
        .create_transaction(
            user_id.into_inner(),
            NewTransaction::new(
                deposit.kind,
                deposit.amount,
                deposit.description,
                category.id,
                date,
                deposit.note,
            ),
        )
        .await?;

    Ok(HttpResponse::Ok().json(transaction))
}
