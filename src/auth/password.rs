use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, Version};
use argon2::{PasswordHasher as _, PasswordVerifier as _};
use rand::RngCore;
use thiserror::Error;

use crate::config::SecurityConfig;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("invalid hash parameters: {0}")]
    Params(String),

    #[error("failed to hash password: {0}")]
    Hash(String),
}

/// Argon2id hasher with a configurable work factor.
///
/// Hashes are PHC strings that embed their own salt and parameters, so
/// `verify` keeps accepting hashes produced under an older cost.
#[derive(Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    pub fn new(memory_kib: u32, iterations: u32) -> Result<Self, HashError> {
        let params = Params::new(memory_kib, iterations, 1, None).map_err(|e| HashError::Params(e.to_string()))?;
        Ok(Self { params })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, HashError> {
        Self::new(security.password_memory_kib, security.password_iterations)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = salt().map_err(|e| HashError::Hash(e.to_string()))?;
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| HashError::Hash(e.to_string()))
    }

    /// Malformed hashes fail closed.
    pub fn verify(&self, password: &str, hashword: &str) -> bool {
        PasswordHash::new(hashword)
            .ok()
            .as_ref()
            .map(|hash| self.argon2().verify_password(password.as_bytes(), hash).is_ok())
            .unwrap_or(false)
    }
}

fn salt() -> Result<SaltString, argon2::password_hash::Error> {
    let mut bytes = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    SaltString::encode_b64(&bytes)
}
