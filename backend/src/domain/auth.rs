//! Authentication primitives: login credentials and signup requests.
//!
//! Keep form parsing outside the domain by exposing constructors that
//! validate raw string inputs before a handler talks to a port.

use zeroize::Zeroizing;

use super::{Role, UserValidationError, Username};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace so credential comparisons see exactly what was typed.
///
/// # Examples
/// ```
/// use lectern::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ada ", "pw").unwrap();
/// assert_eq!(creds.username().as_ref(), "ada");
/// assert_eq!(creds.password(), "pw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = Username::new(username).map_err(|_| LoginValidationError::EmptyUsername)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username suitable for user lookups.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Reasons a signup form is rejected before touching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
    /// Role was missing or not one of `student`/`teacher`.
    #[error("role must be one of: student, teacher")]
    InvalidRole,
}

/// Validated signup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    credentials: LoginCredentials,
    role: Role,
}

impl SignupRequest {
    /// Validate raw form inputs.
    ///
    /// # Examples
    /// ```
    /// use lectern::domain::{Role, SignupRequest, SignupValidationError};
    ///
    /// let request = SignupRequest::try_from_parts("ada", "pw", "teacher").unwrap();
    /// assert_eq!(request.role(), Role::Teacher);
    ///
    /// let err = SignupRequest::try_from_parts("ada", "pw", "admin").unwrap_err();
    /// assert_eq!(err, SignupValidationError::InvalidRole);
    /// ```
    pub fn try_from_parts(
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<Self, SignupValidationError> {
        let credentials =
            LoginCredentials::try_from_parts(username, password).map_err(|err| match err {
                LoginValidationError::EmptyUsername => SignupValidationError::EmptyUsername,
                LoginValidationError::EmptyPassword => SignupValidationError::EmptyPassword,
            })?;
        let role = role
            .parse::<Role>()
            .map_err(|_: UserValidationError| SignupValidationError::InvalidRole)?;
        Ok(Self { credentials, role })
    }

    /// Requested account name.
    pub fn username(&self) -> &Username {
        self.credentials.username()
    }

    /// Plain-text password, hashed before storage.
    pub fn password(&self) -> &str {
        self.credentials.password()
    }

    /// Requested role.
    pub fn role(&self) -> Role {
        self.role
    }
}
