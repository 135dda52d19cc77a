use std::sync::Arc;

use actix_web::dev::ServiceRequest;
use actix_web::web::Data;
use actix_web::{Error, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use actix_web_httpauth::extractors::{bearer, AuthenticationError};
use actix_web_httpauth::headers::www_authenticate::bearer::Bearer;
use centime_repo::user_repo::UserRepo;
use jwt::JWTAuth;
use tracing_actix_web::RootSpan;

use crate::user::UserId;

pub mod handlers;
pub mod jwt;
pub mod password;

/// Validates credentials using [JWTAuth] and checks that the user still exists. If valid, injects
/// the user id into the request and into the [RootSpan]
pub async fn credentials_validator(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let jwt_auth = req.app_data::<JWTAuth>().unwrap();
    let Ok(user_id) = jwt_auth.validate_token(credentials.token()) else {
        return Err((unauthorized(), req));
    };

    let user_repo = req.app_data::<Data<Arc<dyn UserRepo>>>().unwrap().clone();
    if user_repo.get_user(user_id).await.is_err() {
        return Err((unauthorized(), req));
    }

    if let Some(root_span) = req.extensions().get::<RootSpan>() {
        root_span.record("user_id", user_id);
    }
    req.extensions_mut().insert::<UserId>(user_id);
    Ok(req)
}

fn unauthorized() -> Error {
    let challenge = Bearer::build().error(bearer::Error::InvalidToken).finish();
    AuthenticationError::new(challenge).into()
}
