use crate::application::auth_service::AuthService;
use crate::domain::error::DomainError;
use crate::domain::user::{LoginRequest, SignupRequest};
use crate::presentation::handlers::{ApiError, AppState};
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::{error, info, instrument};

#[derive(Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub token: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
}

#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn signup(
    state: web::Data<AppState>,
    req: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    info!(email = %req.email, "Signup request received");

    // Collaborator handles are taken per request, not cached at process scope
    let auth_service = AuthService::new(state.user_repository.clone(), state.jwt_secret.clone());

    let (user, token) = auth_service.signup(req.into_inner()).await.map_err(|e| {
        error!(error = %e, "Failed to create user");
        match e.downcast_ref::<DomainError>() {
            Some(DomainError::EmailTaken) => ApiError::EmailTaken,
            _ => ApiError::SignupFailed(e.to_string()),
        }
    })?;

    info!(user_id = %user.id, "User created");
    Ok(HttpResponse::Ok().json(SignupResponse {
        message: "user created",
        token,
    }))
}

#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    info!(email = %req.email, "Login request received");

    let auth_service = AuthService::new(state.user_repository.clone(), state.jwt_secret.clone());

    let token = auth_service.login(req.into_inner()).await.map_err(|e| {
        error!(error = %e, "Failed to login");
        ApiError::from(e)
    })?;

    info!("Login successful");
    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "login successful",
        token,
    }))
}
