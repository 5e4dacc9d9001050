use crate::data::user_repository::InMemoryUserRepository;
use crate::domain::error::DomainError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// Shared handles the handlers draw from on every request.
pub struct AppState {
    pub user_repository: Arc<InMemoryUserRepository>,
    pub jwt_secret: String,
}

// Uniform error response format
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("error while creating user")]
    EmailTaken,
    #[error("error while creating user")]
    SignupFailed(String),
    #[error("user not found")]
    UserNotFound,
    #[error("password incorrect")]
    PasswordIncorrect,
    #[error("internal error")]
    Internal(String),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::EmailTaken => "email_taken",
            ApiError::SignupFailed(_) => "signup_failed",
            ApiError::UserNotFound => "not_found",
            ApiError::PasswordIncorrect => "invalid_credentials",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EmailTaken => StatusCode::BAD_REQUEST,
            ApiError::SignupFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::PasswordIncorrect => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Client failures log at warn, server failures at error with the cause
        match self {
            ApiError::EmailTaken => warn!(status = %status, "Email already registered"),
            ApiError::UserNotFound => warn!(status = %status, "User not found"),
            ApiError::PasswordIncorrect => warn!(status = %status, "Password mismatch"),
            ApiError::SignupFailed(cause) => {
                error!(status = %status, cause = %cause, "Signup failed")
            }
            ApiError::Internal(cause) => {
                error!(status = %status, cause = %cause, "Internal error")
            }
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind(),
            message: self.to_string(),
        })
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<DomainError>() {
            Some(DomainError::EmailTaken) => ApiError::EmailTaken,
            Some(DomainError::UserNotFound) => ApiError::UserNotFound,
            Some(DomainError::PasswordIncorrect) => ApiError::PasswordIncorrect,
            Some(DomainError::Internal(msg)) => ApiError::Internal(msg.clone()),
            None => ApiError::Internal(err.to_string()),
        }
    }
}

// Handlers

#[instrument]
pub async fn greeting() -> HttpResponse {
    HttpResponse::Ok().body("Hello Hono!")
}

// Blog storage is not wired up yet; these routes answer with placeholders.

#[instrument]
pub async fn post_blog() -> HttpResponse {
    info!("Blog create requested");
    HttpResponse::Ok().body("blog")
}

#[instrument]
pub async fn put_blog() -> HttpResponse {
    info!("Blog update requested");
    HttpResponse::Ok().body("blog")
}

#[instrument(fields(blog_id = %*path))]
pub async fn get_blog(path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    info!(blog_id = %id, "Blog read requested");
    HttpResponse::Ok().body(format!("blog: {}", id))
}
