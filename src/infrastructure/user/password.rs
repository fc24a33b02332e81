//! Password hashing using Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher as Argon2PasswordHasher, SaltString},
    Argon2,
};

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// One-way transform of a plaintext credential into its stored form.
///
/// Only hashing is needed: the service has no login endpoint, so there
/// is no verification path.
#[cfg_attr(test, automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, DomainError>;
}

/// Argon2-based password hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }
}
