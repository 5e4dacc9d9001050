use crate::domain::user::User;
use anyhow::Result;
use async_trait::async_trait;

/// Record store for users. The store assigns `id` and `created_at` and owns
/// the unique constraint on `email`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(
        &self,
        email: &str,
        name: Option<&str>,
        password_hash: &str,
    ) -> Result<User>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
}
