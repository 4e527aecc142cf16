//! Argon2id implementation of [`CredentialHasher`].
//!
//! Hashes are stored in PHC string form, so the algorithm, parameters and
//! salt travel with each record and verification needs no extra state.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::domain::PasswordHash;
use crate::domain::ports::{CredentialHasher, CredentialHasherError};

/// Argon2id hasher with configurable cost parameters.
#[derive(Clone, Default)]
pub struct Argon2CredentialHasher {
    argon2: Argon2<'static>,
}

impl Argon2CredentialHasher {
    /// Hasher using the crate's recommended default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with explicit cost parameters; tests use cheap ones.
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHasherError> {
        let salt = SaltString::generate(&mut OsRng);
        let encoded = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| CredentialHasherError::hashing(err.to_string()))?
            .to_string();
        PasswordHash::new(encoded).map_err(|err| CredentialHasherError::hashing(err.to_string()))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> bool {
        match PhcHash::new(hash.as_ref()) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
