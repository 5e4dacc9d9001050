use crate::domain::error::DomainError;
use crate::domain::repository::UserRepository;
use crate::domain::user::User;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, trace, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct InMemoryUserRepository {
    storage: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self, password_hash), fields(email = email))]
    async fn create_user(
        &self,
        email: &str,
        name: Option<&str>,
        password_hash: &str,
    ) -> Result<User> {
        trace!("Acquiring write lock for user storage");
        let mut storage = self.storage.write().await;

        // email carries a unique constraint; checked under the write lock
        if storage.values().any(|u| u.email == email) {
            warn!(email = email, "Unique constraint violation on email");
            return Err(DomainError::EmailTaken.into());
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.map(str::to_string),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };

        trace!(user_id = %user.id, "Inserting user into storage");
        storage.insert(user.id.clone(), user.clone());
        debug!(
            user_id = %user.id,
            email = %user.email,
            "User created in memory storage"
        );
        Ok(user)
    }

    #[instrument(skip(self), fields(email = email))]
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        trace!("Acquiring read lock for user storage");
        let storage = self.storage.read().await;
        let user = storage.values().find(|u| u.email == email).cloned();
        match &user {
            Some(u) => {
                debug!(user_id = %u.id, email = %u.email, "User found in storage");
            }
            None => {
                trace!(email = email, "User not found in storage");
            }
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_user_assigns_id_and_stores_fields() {
        let repo = InMemoryUserRepository::new();

        let user = repo
            .create_user("test@example.com", Some("Test"), "hash123")
            .await
            .unwrap();

        assert!(!user.id.is_empty());
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.name.as_deref(), Some("Test"));
        assert_eq!(user.password_hash, "hash123");

        let found = repo.find_user_by_email("test@example.com").await.unwrap();
        assert_eq!(found.unwrap().id, user.id);
    }

    #[tokio::test]
    async fn test_create_user_without_name() {
        let repo = InMemoryUserRepository::new();

        let user = repo
            .create_user("anon@example.com", None, "hash")
            .await
            .unwrap();

        assert!(user.name.is_none());
    }

    #[tokio::test]
    async fn test_create_user_assigns_distinct_ids() {
        let repo = InMemoryUserRepository::new();

        let user1 = repo
            .create_user("one@example.com", None, "hash1")
            .await
            .unwrap();
        let user2 = repo
            .create_user("two@example.com", None, "hash2")
            .await
            .unwrap();

        assert_ne!(user1.id, user2.id);
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();

        repo.create_user("duplicate@example.com", None, "hash1")
            .await
            .unwrap();

        let err = repo
            .create_user("duplicate@example.com", None, "hash2")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::EmailTaken)
        ));

        // The first insert is untouched
        let found = repo
            .find_user_by_email("duplicate@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.password_hash, "hash1");
    }

    #[tokio::test]
    async fn test_find_user_by_email_returns_none_for_nonexistent_email() {
        let repo = InMemoryUserRepository::new();

        let found = repo
            .find_user_by_email("nonexistent@example.com")
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_user_by_email_case_sensitive() {
        let repo = InMemoryUserRepository::new();

        repo.create_user("Test@Example.com", None, "hash")
            .await
            .unwrap();

        // Exact match should work
        let found = repo.find_user_by_email("Test@Example.com").await.unwrap();
        assert!(found.is_some());

        // Different case should not match
        let not_found = repo.find_user_by_email("test@example.com").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_creates() {
        let repo = InMemoryUserRepository::new();

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let repo_clone = repo.clone();
                tokio::spawn(async move {
                    repo_clone
                        .create_user(&format!("user{}@example.com", i), None, "hash")
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        for i in 0..10 {
            let found = repo
                .find_user_by_email(&format!("user{}@example.com", i))
                .await
                .unwrap();
            assert!(found.is_some());
        }
    }

    #[tokio::test]
    async fn test_concurrent_creates_same_email_only_one_wins() {
        let repo = InMemoryUserRepository::new();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let repo_clone = repo.clone();
                tokio::spawn(async move {
                    repo_clone
                        .create_user("race@example.com", None, "hash")
                        .await
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
    }
}
