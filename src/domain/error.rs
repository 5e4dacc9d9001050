use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("user with this email already exists")]
    EmailTaken,
    #[error("user not found")]
    UserNotFound,
    #[error("password incorrect")]
    PasswordIncorrect,
    #[error("Internal error: {0}")]
    Internal(String),
}
