//! Password login against the user store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{LoginService, UserRepository, UserRepositoryError};
use crate::domain::{Error, LoginCredentials, Principal, password};

/// Authenticates credentials by email lookup and Argon2 verification.
///
/// Lookup misses and verification failures both map to the same
/// `unauthorized` error so the response does not reveal which part failed.
#[derive(Clone)]
pub struct PasswordLoginService {
    users: Arc<dyn UserRepository>,
}

impl PasswordLoginService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    fn invalid_credentials() -> Error {
        Error::unauthorized("invalid credentials")
    }

    fn map_store_error(error: UserRepositoryError) -> Error {
        Error::internal(format!("user store error: {error}"))
    }
}

#[async_trait]
impl LoginService for PasswordLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Principal, Error> {
        let Some(user) = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(Self::map_store_error)?
        else {
            debug!("login attempt for unknown email");
            return Err(Self::invalid_credentials());
        };

        let verified = password::verify(credentials.password(), &user.password_hash)
            .map_err(|err| Error::internal(format!("password verification failed: {err}")))?;
        if !verified {
            debug!(user_id = %user.id, "password mismatch");
            return Err(Self::invalid_credentials());
        }

        Ok(Principal {
            id: user.id,
            username: user.username,
        })
    }
}
