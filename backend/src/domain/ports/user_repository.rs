//! Driven port for account persistence.
use async_trait::async_trait;

use crate::domain::{User, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The backing store could not be read or written.
        Io { message: String } => "user store i/o failed: {message}",
        /// The stored document could not be decoded.
        Corrupt { message: String } => "user store is corrupt: {message}",
        /// An account with this username already exists.
        Duplicate { username: String } => "username already exists: {username}",
    }
}

/// Account storage.
///
/// `insert` checks uniqueness and writes in one step so two signups racing
/// for the same name cannot both succeed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch an account by exact username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Store a new account, failing with
    /// [`UserPersistenceError::Duplicate`] when the name is taken.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;
}
