//! Driven port for one-way password hashing.
//!
//! Hashing is CPU-bound and synchronous; adapters choose the algorithm and
//! encode it, with its salt, into the returned [`PasswordHash`].

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised while producing a hash.
    pub enum CredentialHasherError {
        /// The hashing primitive rejected its input or parameters.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

/// Salted one-way hash over passwords.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash `password` with a fresh random salt.
    fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHasherError>;

    /// Whether `password` matches `hash`. Malformed hashes never match.
    fn verify(&self, password: &str, hash: &PasswordHash) -> bool;
}
