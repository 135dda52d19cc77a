use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use centime_repo::category_repo::CategoryRepoError;
use centime_repo::transaction_repo::TransactionRepoError;
use centime_repo::user_repo::UserRepoError;
use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    User(#[from] UserRepoError),
    #[error(transparent)]
    Category(#[from] CategoryRepoError),
    #[error(transparent)]
    Transaction(#[from] TransactionRepoError),
    #[error("Unable to process password")]
    PasswordHash(#[from] argon2::Error),
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::Validation(_) => StatusCode::BAD_REQUEST,
            HandlerError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            HandlerError::User(UserRepoError::UserNotFound(_)) => StatusCode::NOT_FOUND,
            HandlerError::User(UserRepoError::EmailNotFound(_)) => StatusCode::NOT_FOUND,
            HandlerError::User(UserRepoError::UserAlreadyExists) => StatusCode::CONFLICT,
            HandlerError::Category(CategoryRepoError::CategoryNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            HandlerError::Category(CategoryRepoError::CategoryNameNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            HandlerError::Category(CategoryRepoError::CategoryAlreadyExists(_)) => {
                StatusCode::CONFLICT
            }
            HandlerError::Transaction(TransactionRepoError::InvalidMonth { .. }) => {
                StatusCode::BAD_REQUEST
            }
            HandlerError::User(UserRepoError::Other(_))
            | HandlerError::Category(CategoryRepoError::Other(_))
            | HandlerError::Transaction(TransactionRepoError::Other(_))
            | HandlerError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "Request handler failed");
            return HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Internal server error" }));
        }
        HttpResponse::build(status).json(serde_json::json!({ "error": self.to_string() }))
    }
}
