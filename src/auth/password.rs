use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
}

/// Salted argon2 digest. A fresh salt every call, so hashing the same
/// password twice yields different digests.
pub fn hash(plain: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let digest = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(PasswordError::Hash)?;
    Ok(digest.to_string())
}

/// Absent stays absent: callers use this when a payload may omit the
/// password to mean "keep the current one".
pub fn hash_optional(plain: Option<&str>) -> Result<Option<String>, PasswordError> {
    match plain {
        Some(p) => hash(p).map(Some),
        None => Ok(None),
    }
}

/// Constant-time check of a candidate against a stored digest. A digest that
/// does not parse simply fails the check.
pub fn verify(plain: &str, digest: &str) -> bool {
    match PasswordHash::new(digest) {
        Ok(parsed) => Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
