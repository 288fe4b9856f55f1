//! Authenticated identity and login input validation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserId;

/// The authenticated identity attached to a request.
///
/// Carried in the session cookie and required by every mutating operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    #[schema(value_type = String, format = Uuid)]
    pub id: UserId,
    pub username: String,
}

/// Validation errors for [`LoginCredentials`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Raw login input, shape-checked but not yet authenticated.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    email: String,
    password: String,
}

impl LoginCredentials {
    /// Validate the credential shape without touching any store.
    pub fn try_from_parts(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, LoginValidationError> {
        let email = email.into();
        let password = password.into();
        if email.trim().is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self { email, password })
    }

    /// Email the user claims to own.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password to verify against the stored hash.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
