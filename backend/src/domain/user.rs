//! User record and its value objects.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors for user value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyEmail,
    InvalidEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a well-formed address"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        let parsed = Uuid::parse_str(raw).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed))
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Syntax check only: one @, no whitespace, a dotted domain part.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address stored exactly as supplied.
///
/// ## Invariants
/// - Matches a well-formed address syntax.
/// - No case normalisation is performed; uniqueness is byte-for-byte on the
///   stored value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `email` is unique across the user store and immutable after creation.
/// - `password_hash` is an Argon2 PHC string; plaintext is never stored.
/// - `skills` is an ordered list replaced wholesale on update; `interests`
///   behaves as a set (union on add, pull on remove).
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a freshly registered user with empty profile collections.
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: EmailAddress,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email,
            password_hash: password_hash.into(),
            avatar: None,
            skills: Vec::new(),
            interests: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@x.com", true)]
    #[case("alice.smith@mail.example.org", true)]
    #[case("", false)]
    #[case("not-an-email", false)]
    #[case("two@@x.com", false)]
    #[case("spaced name@x.com", false)]
    #[case("missing@dot", false)]
    fn email_syntax_check(#[case] input: &str, #[case] accepted: bool) {
        assert_eq!(EmailAddress::new(input).is_ok(), accepted, "{input}");
    }

    #[test]
    fn email_is_stored_as_given() {
        let email = EmailAddress::new("Alice@X.com").expect("valid email");
        assert_eq!(email.as_ref(), "Alice@X.com");
    }

    #[test]
    fn user_id_round_trips_through_strings() {
        let id = UserId::random();
        let parsed = UserId::new(id.to_string()).expect("round trip");
        assert_eq!(parsed, id);
    }

    #[test]
    fn user_id_rejects_garbage() {
        assert_eq!(UserId::new(""), Err(UserValidationError::EmptyId));
        assert_eq!(UserId::new("nope"), Err(UserValidationError::InvalidId));
    }

    #[test]
    fn new_user_starts_with_empty_profile() {
        let user = User::new(
            UserId::random(),
            "alice",
            EmailAddress::new("a@x.com").expect("email"),
            "$argon2id$fake",
        );
        assert!(user.avatar.is_none());
        assert!(user.skills.is_empty());
        assert!(user.interests.is_empty());
    }
}
