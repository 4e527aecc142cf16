//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Error, SignupRequest, User};

/// Message shown when the requested username is taken.
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already exists.";

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Hash the password and store the account.
    ///
    /// A taken username yields [`crate::domain::ErrorCode::Conflict`] with
    /// [`USERNAME_TAKEN_MESSAGE`].
    async fn register(&self, request: &SignupRequest) -> Result<User, Error>;
}
