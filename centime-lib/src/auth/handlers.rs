use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use centime_repo::user_repo::{NewUser, UserRepo, UserRepoError};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::jwt::JWTAuth;
use crate::auth::password;
use crate::error::HandlerError;
use crate::user::{UserId, UserInfo};
use crate::validate;
use crate::validate::ValidationError;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl RegistrationRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::required("Username", &self.username)?;
        validate::length("Username", &self.username, 4, 25)?;
        validate::required("Email", &self.email)?;
        validate::length("Email", &self.email, 6, 35)?;
        validate::required("Password", &self.password)?;
        if self.password != self.confirm {
            return Err(ValidationError("Passwords must match".to_owned()));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

#[post("/registration")]
pub async fn registration(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    request: web::Json<RegistrationRequest>,
) -> Result<impl Responder, HandlerError> {
    let request = request.into_inner();
    request.validate()?;

    let password_hash = password::encode_password(request.password)?;
    let user = user_repo
        .create_user(NewUser::new(request.username, request.email, password_hash))
        .await?;
    info!(user_id = user.id, "Created user");

    Ok(HttpResponse::Ok().json(UserInfo::from(user)))
}

#[post("/login")]
pub async fn login(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    request: web::Json<LoginRequest>,
    req: HttpRequest,
) -> Result<impl Responder, HandlerError> {
    let request = request.into_inner();
    validate::required("Email", &request.email)?;
    validate::required("Password", &request.password)?;

    // Unknown emails and wrong passwords get the same response
    let user = match user_repo.get_user_by_email(&request.email).await {
        Ok(user) => user,
        Err(UserRepoError::EmailNotFound(_)) => return Err(HandlerError::InvalidCredentials),
        Err(e) => return Err(e.into()),
    };

    let matched = password::verify_password(request.password, user.password_hash)?;
    if !matched {
        return Err(HandlerError::InvalidCredentials);
    }

    let jwt_auth = req.app_data::<JWTAuth>().unwrap();
    Ok(HttpResponse::Ok().json(TokenResponse {
        token: jwt_auth.create_token(user.id),
    }))
}

#[get("/logout")]
pub async fn logout(user_id: web::ReqData<UserId>) -> impl Responder {
    info!(user_id = user_id.into_inner(), "User logged out");
    HttpResponse::Ok().json(serde_json::json!({ "message": "Logged out" }))
}
