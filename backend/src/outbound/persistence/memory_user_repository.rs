//! In-memory user store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

/// Map-backed user repository with store-level email uniqueness.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn update_user<F>(&self, id: &UserId, apply: F) -> Result<(), UserRepositoryError>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or_else(|| UserRepositoryError::Query {
            message: format!("no user with id {id}"),
        })?;
        apply(user);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        // Byte-for-byte match; the store performs no normalisation.
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email.as_ref() == email)
            .cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|existing| existing.email == user.email)
        {
            return Err(UserRepositoryError::DuplicateEmail {
                email: user.email.to_string(),
            });
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn set_avatar(&self, id: &UserId, filename: &str) -> Result<(), UserRepositoryError> {
        let filename = filename.to_owned();
        self.update_user(id, |user| user.avatar = Some(filename))
            .await
    }

    async fn set_username(&self, id: &UserId, username: &str) -> Result<(), UserRepositoryError> {
        let username = username.to_owned();
        self.update_user(id, |user| user.username = username).await
    }

    async fn replace_skills(
        &self,
        id: &UserId,
        skills: Vec<String>,
    ) -> Result<(), UserRepositoryError> {
        self.update_user(id, |user| user.skills = skills).await
    }

    async fn add_interests(
        &self,
        id: &UserId,
        interests: Vec<String>,
    ) -> Result<(), UserRepositoryError> {
        self.update_user(id, |user| {
            for interest in interests {
                if !user.interests.contains(&interest) {
                    user.interests.push(interest);
                }
            }
        })
        .await
    }

    async fn remove_interest(
        &self,
        id: &UserId,
        interest: &str,
    ) -> Result<(), UserRepositoryError> {
        self.update_user(id, |user| user.interests.retain(|entry| entry != interest))
            .await
    }

    async fn remove_skill(&self, id: &UserId, skill: &str) -> Result<(), UserRepositoryError> {
        self.update_user(id, |user| user.skills.retain(|entry| entry != skill))
            .await
    }
}
