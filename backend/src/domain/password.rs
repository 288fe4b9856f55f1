//! Password hashing and verification.
//!
//! Argon2id with the library's default parameters and a random per-hash
//! salt. The cost factor is fixed here and not user-tunable.

use std::sync::LazyLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use thiserror::Error;

static CONTEXT: LazyLock<Argon2<'static>> = LazyLock::new(|| {
    Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2::Params::DEFAULT,
    )
});

/// Failure while deriving a password hash.
#[derive(Debug, Error)]
#[error("failed to generate password hash")]
pub struct HashPasswordError;

/// Derive a salted PHC-format hash for storage.
pub fn hash(password: &str) -> Result<String, HashPasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = CONTEXT
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| HashPasswordError)?;
    Ok(hashed.to_string())
}

/// Failure while verifying a password against a stored hash.
#[derive(Debug, Error)]
#[error("failed to verify password")]
pub struct VerifyPasswordError;

/// Check a plaintext password against a stored PHC string.
///
/// Returns `Ok(false)` for a well-formed hash that does not match; parse
/// failures and backend errors are reported as [`VerifyPasswordError`].
pub fn verify(password: &str, stored_hash: &str) -> Result<bool, VerifyPasswordError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| VerifyPasswordError)?;
    match CONTEXT.verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(_) => Err(VerifyPasswordError),
    }
}
