//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call this to authenticate credentials without knowing
//! the backing store or hashing scheme, so HTTP handler tests can substitute
//! a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Principal, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated principal.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Principal, Error>;
}

/// In-memory authenticator for tests and early development wiring.
///
/// `dev@example.com` / `password` authenticates as a fixed principal; all
/// other credentials are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

impl FixtureLoginService {
    const FIXTURE_ID: &'static str = "123e4567-e89b-12d3-a456-426614174000";
}

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Principal, Error> {
        if credentials.email() == "dev@example.com" && credentials.password() == "password" {
            let id = UserId::new(Self::FIXTURE_ID)
                .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))?;
            Ok(Principal {
                id,
                username: "dev".to_owned(),
            })
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("dev@example.com", "password", true)]
    #[case("dev@example.com", "wrong", false)]
    #[case("other@example.com", "password", false)]
    #[tokio::test]
    async fn fixture_grants_only_the_dev_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let service = FixtureLoginService;
        let creds = LoginCredentials::try_from_parts(email, password).expect("credential shape");
        let result = service.authenticate(&creds).await;
        match (should_succeed, result) {
            (true, Ok(principal)) => assert_eq!(principal.username, "dev"),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(principal)) => panic!("expected failure, got principal: {principal:?}"),
        }
    }
}
