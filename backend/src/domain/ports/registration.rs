//! Driving port for the registration use-case.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Error, UserId};

/// Raw registration input as submitted by the user.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// A single validation problem with the registration input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationIssue {
    /// One or more of the four required fields was empty.
    #[error("please fill in all fields")]
    MissingRequiredField,
    /// The email does not match a well-formed address syntax.
    #[error("please enter a valid email")]
    InvalidEmail,
    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
    /// Password shorter than six characters.
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
    /// The email is already registered.
    #[error("email is already registered")]
    EmailAlreadyRegistered,
}

/// Rejected registration: every applicable issue, plus the non-secret
/// fields echoed back for form re-display. The password is never echoed.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRejection {
    pub issues: Vec<RegistrationIssue>,
    pub username: String,
    pub email: String,
}

/// Accepted registration.
///
/// `persisted` is `false` when the insert failed and was swallowed; callers
/// may inspect it, but the boundary layer deliberately reports success
/// either way.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationReceipt {
    pub user_id: UserId,
    pub persisted: bool,
}

/// Outcome of a registration attempt that reached the service.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    Registered(RegistrationReceipt),
    Rejected(RegistrationRejection),
}

/// Domain use-case port for registering a new user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Validate the input and create the user.
    ///
    /// `Err` is reserved for unexpected store read failures; validation and
    /// duplicate-email problems are reported through
    /// [`RegistrationOutcome::Rejected`].
    async fn register(&self, request: RegistrationRequest) -> Result<RegistrationOutcome, Error>;
}

/// Fixture implementation accepting every request without persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRegistrationService;

#[async_trait]
impl RegistrationService for FixtureRegistrationService {
    async fn register(&self, _request: RegistrationRequest) -> Result<RegistrationOutcome, Error> {
        Ok(RegistrationOutcome::Registered(RegistrationReceipt {
            user_id: UserId::random(),
            persisted: true,
        }))
    }
}
