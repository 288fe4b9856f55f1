//! Registration use-case implementation.
//!
//! Validation accumulates every applicable issue before the store is
//! touched. The email pre-check and the insert-time uniqueness constraint
//! are both kept: the pre-check feeds the accumulated-validation flow, the
//! constraint closes the check-then-insert race.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    RegistrationIssue, RegistrationOutcome, RegistrationReceipt, RegistrationRejection,
    RegistrationRequest, RegistrationService, UserRepository, UserRepositoryError,
};
use crate::domain::{EmailAddress, Error, User, UserId, password};

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN: usize = 6;

/// Registration service backed by the user repository.
#[derive(Clone)]
pub struct RegistrationServiceImpl {
    users: Arc<dyn UserRepository>,
}

impl RegistrationServiceImpl {
    /// Create a new service over the given user store.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Collect every applicable validation issue, or the parsed email.
    ///
    /// A missing field short-circuits the remaining checks (they would all
    /// be about the absent values); otherwise the syntax, mismatch, and
    /// length issues accumulate rather than failing fast.
    fn validate(request: &RegistrationRequest) -> Result<EmailAddress, Vec<RegistrationIssue>> {
        if request.username.is_empty()
            || request.email.is_empty()
            || request.password.is_empty()
            || request.confirm_password.is_empty()
        {
            return Err(vec![RegistrationIssue::MissingRequiredField]);
        }

        let mut issues = Vec::new();
        let email = EmailAddress::new(&request.email);
        if email.is_err() {
            issues.push(RegistrationIssue::InvalidEmail);
        }
        if request.password != request.confirm_password {
            issues.push(RegistrationIssue::PasswordMismatch);
        }
        if request.password.chars().count() < PASSWORD_MIN {
            issues.push(RegistrationIssue::PasswordTooShort);
        }

        match email {
            Ok(email) if issues.is_empty() => Ok(email),
            _ => Err(issues),
        }
    }

    fn rejection(request: &RegistrationRequest, issues: Vec<RegistrationIssue>) -> RegistrationRejection {
        RegistrationRejection {
            issues,
            username: request.username.clone(),
            email: request.email.clone(),
        }
    }

    fn map_store_error(error: UserRepositoryError) -> Error {
        Error::internal(format!("user store error: {error}"))
    }
}

#[async_trait]
impl RegistrationService for RegistrationServiceImpl {
    async fn register(&self, request: RegistrationRequest) -> Result<RegistrationOutcome, Error> {
        let email = match Self::validate(&request) {
            Ok(email) => email,
            Err(issues) => {
                return Ok(RegistrationOutcome::Rejected(Self::rejection(
                    &request, issues,
                )));
            }
        };

        if self
            .users
            .find_by_email(email.as_ref())
            .await
            .map_err(Self::map_store_error)?
            .is_some()
        {
            return Ok(RegistrationOutcome::Rejected(Self::rejection(
                &request,
                vec![RegistrationIssue::EmailAlreadyRegistered],
            )));
        }

        let password_hash = password::hash(&request.password)
            .map_err(|err| Error::internal(format!("password hashing failed: {err}")))?;
        let user = User::new(UserId::random(), request.username.clone(), email, password_hash);

        match self.users.insert(&user).await {
            Ok(()) => Ok(RegistrationOutcome::Registered(RegistrationReceipt {
                user_id: user.id,
                persisted: true,
            })),
            Err(UserRepositoryError::DuplicateEmail { .. }) => {
                // Lost the race between the pre-check and the insert.
                Ok(RegistrationOutcome::Rejected(Self::rejection(
                    &request,
                    vec![RegistrationIssue::EmailAlreadyRegistered],
                )))
            }
            Err(err) => {
                error!(error = %err, user_id = %user.id, "user insert failed; success is still reported");
                Ok(RegistrationOutcome::Registered(RegistrationReceipt {
                    user_id: user.id,
                    persisted: false,
                }))
            }
        }
    }
}
