//! Driven port for user persistence.
//!
//! Every mutation below is an independent, field-level update against one
//! user record, mirroring the partial-update semantics of the backing
//! document store. There is no cross-field transaction.

use async_trait::async_trait;

use crate::domain::{User, UserId};

/// Errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// Store connection could not be established.
    #[error("user store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query { message: String },
    /// Insert rejected because the email is already present.
    ///
    /// This is the store-level uniqueness constraint that closes the
    /// check-then-insert race on registration.
    #[error("email {email} is already registered")]
    DuplicateEmail { email: String },
}

/// Port for user storage, lookup, and field-level partial updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by id. Returns `None` when no record matches.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by exact email match (no normalisation).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Insert a new user, enforcing email uniqueness.
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Overwrite the avatar filename.
    async fn set_avatar(&self, id: &UserId, filename: &str) -> Result<(), UserRepositoryError>;

    /// Overwrite the username verbatim.
    async fn set_username(&self, id: &UserId, username: &str) -> Result<(), UserRepositoryError>;

    /// Replace the entire skills list (full overwrite, not a merge).
    async fn replace_skills(
        &self,
        id: &UserId,
        skills: Vec<String>,
    ) -> Result<(), UserRepositoryError>;

    /// Set-union each interest into the existing interests.
    async fn add_interests(
        &self,
        id: &UserId,
        interests: Vec<String>,
    ) -> Result<(), UserRepositoryError>;

    /// Remove all occurrences of the given interest (pull semantics).
    async fn remove_interest(
        &self,
        id: &UserId,
        interest: &str,
    ) -> Result<(), UserRepositoryError>;

    /// Remove all occurrences of the given skill (pull semantics).
    async fn remove_skill(&self, id: &UserId, skill: &str) -> Result<(), UserRepositoryError>;
}

/// Fixture implementation for tests that do not exercise user storage.
///
/// Lookups return `None` and every mutation is accepted and discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }

    async fn insert(&self, _user: &User) -> Result<(), UserRepositoryError> {
        Ok(())
    }

    async fn set_avatar(&self, _id: &UserId, _filename: &str) -> Result<(), UserRepositoryError> {
        Ok(())
    }

    async fn set_username(&self, _id: &UserId, _username: &str) -> Result<(), UserRepositoryError> {
        Ok(())
    }

    async fn replace_skills(
        &self,
        _id: &UserId,
        _skills: Vec<String>,
    ) -> Result<(), UserRepositoryError> {
        Ok(())
    }

    async fn add_interests(
        &self,
        _id: &UserId,
        _interests: Vec<String>,
    ) -> Result<(), UserRepositoryError> {
        Ok(())
    }

    async fn remove_interest(
        &self,
        _id: &UserId,
        _interest: &str,
    ) -> Result<(), UserRepositoryError> {
        Ok(())
    }

    async fn remove_skill(&self, _id: &UserId, _skill: &str) -> Result<(), UserRepositoryError> {
        Ok(())
    }
}
