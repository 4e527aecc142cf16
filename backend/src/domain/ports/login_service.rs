//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call it to check credentials without knowing how
//! accounts are stored or hashed.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, SessionUser};

/// Message shown for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password.";

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the identity to store in the session.
    ///
    /// Unknown users and wrong passwords both yield
    /// [`crate::domain::ErrorCode::Unauthorized`] with
    /// [`INVALID_CREDENTIALS_MESSAGE`].
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<SessionUser, Error>;
}
