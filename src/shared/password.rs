//! Password hashing with Argon2id.
//!
//! Hashes are stored in PHC string format, so the algorithm, cost parameters
//! and salt travel with the hash and older hashes keep verifying after the
//! configured costs change. Both operations are CPU bound and run on the
//! blocking thread pool.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::core::config::PasswordConfig;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),

    #[error("Failed to hash password: {0}")]
    HashError(String),

    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),

    #[error("Password task failed: {0}")]
    TaskFailed(String),
}

/// Hashes and verifies account passwords
#[derive(Clone)]
pub struct CredentialHasher {
    params: Params,
    /// Hash of a throwaway password, verified when an account does not exist
    /// so that unknown emails cost as much as wrong passwords.
    dummy_hash: Arc<String>,
}

impl CredentialHasher {
    pub fn new(config: &PasswordConfig) -> Result<Self, PasswordError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;

        let dummy_hash = hash_with(&params, "helperhub-dummy-password")?;

        Ok(Self {
            params,
            dummy_hash: Arc::new(dummy_hash),
        })
    }

    /// Hash a plaintext password into a PHC string
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let params = self.params.clone();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hash_with(&params, &password))
            .await
            .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
    }

    /// Hash a replacement password from a patch. Omitted or empty yields `None`,
    /// which keeps the stored hash.
    pub async fn hash_replacement(
        &self,
        password: Option<&str>,
    ) -> Result<Option<String>, PasswordError> {
        match password.filter(|p| !p.is_empty()) {
            Some(password) => self.hash(password).await.map(Some),
            None => Ok(None),
        }
    }

    /// Check a plaintext password against a stored PHC hash.
    ///
    /// `Ok(false)` means the password does not match; `Err` means the stored
    /// hash could not be parsed.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || verify_with(&password, &hash))
            .await
            .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
    }

    /// Burn the same work as a real verification and report failure
    pub async fn verify_dummy(&self, password: &str) -> Result<bool, PasswordError> {
        let hash = Arc::clone(&self.dummy_hash);
        self.verify(password, &hash).await.map(|_| false)
    }
}

fn hash_with(params: &Params, password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone());

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

fn verify_with(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

    // Parameters come from the PHC string, not from the current config
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
