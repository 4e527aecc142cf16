//! Account domain services: signup and login.
//!
//! Both use-cases sit on the same pair of driven ports, so one service type
//! implements [`LoginService`] and [`SignupService`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    CredentialHasher, CredentialHasherError, INVALID_CREDENTIALS_MESSAGE, LoginService,
    SignupService, USERNAME_TAKEN_MESSAGE, UserPersistenceError, UserRepository,
};
use crate::domain::{Error, LoginCredentials, SessionUser, SignupRequest, User};

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Io { message } => {
            Error::internal(format!("user store i/o failed: {message}"))
        }
        UserPersistenceError::Corrupt { message } => {
            Error::internal(format!("user store error: {message}"))
        }
        UserPersistenceError::Duplicate { .. } => Error::conflict(USERNAME_TAKEN_MESSAGE),
    }
}

fn map_hasher_error(error: CredentialHasherError) -> Error {
    Error::internal(error.to_string())
}

/// Account service implementing the login and signup driving ports.
pub struct AccountService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> Clone for AccountService<U, H> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<U, H> AccountService<U, H> {
    /// Create a service over the given repository and hasher.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl<U, H> SignupService for AccountService<U, H>
where
    U: UserRepository,
    H: CredentialHasher,
{
    async fn register(&self, request: &SignupRequest) -> Result<User, Error> {
        if self
            .users
            .find_by_username(request.username())
            .await
            .map_err(map_user_persistence_error)?
            .is_some()
        {
            return Err(Error::conflict(USERNAME_TAKEN_MESSAGE));
        }

        let hash = self
            .hasher
            .hash(request.password())
            .map_err(map_hasher_error)?;
        let user = User::new(request.username().clone(), hash, request.role());

        // The repository re-checks uniqueness under its write lock.
        self.users
            .insert(&user)
            .await
            .map_err(map_user_persistence_error)?;
        info!(username = %user.username(), role = %user.role(), "account created");
        Ok(user)
    }
}

#[async_trait]
impl<U, H> LoginService for AccountService<U, H>
where
    U: UserRepository,
    H: CredentialHasher,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<SessionUser, Error> {
        let Some(user) = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_user_persistence_error)?
        else {
            debug!(username = %credentials.username(), "login for unknown user");
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        };

        if !self
            .hasher
            .verify(credentials.password(), user.password_hash())
        {
            debug!(username = %credentials.username(), "login with wrong password");
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        }

        Ok(user.session_user())
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
