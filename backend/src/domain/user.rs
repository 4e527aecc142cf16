//! Account data model: usernames, roles and stored credentials.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors raised while building user values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Role was neither `student` nor `teacher`.
    #[error("role must be one of: student, teacher")]
    InvalidRole,
    /// Stored password hash was blank.
    #[error("password hash must not be empty")]
    EmptyPasswordHash,
}

/// Unique account name.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace and non-empty.
/// - Compared exactly (case-sensitive).
///
/// # Examples
/// ```
/// use lectern::domain::Username;
///
/// let name = Username::new("  ada  ").unwrap();
/// assert_eq!(name.as_ref(), "ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// What an account may do: teachers author lectures, students read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Reads every lecture and chats about it.
    Student,
    /// Creates lectures and sees only their own.
    Teacher,
}

impl Role {
    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }

    /// Whether this role may create lectures.
    pub fn can_author_lectures(self) -> bool {
        matches!(self, Self::Teacher)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            _ => Err(UserValidationError::InvalidRole),
        }
    }
}

/// Salted one-way password hash in PHC string format.
///
/// The domain never inspects the contents; the credential hasher port owns
/// the format.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash.
    pub fn new(encoded: impl Into<String>) -> Result<Self, UserValidationError> {
        let encoded = encoded.into();
        if encoded.trim().is_empty() {
            return Err(UserValidationError::EmptyPasswordHash);
        }
        Ok(Self(encoded))
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

impl TryFrom<String> for PasswordHash {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registered account.
///
/// Created at signup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: Username,
    password_hash: PasswordHash,
    role: Role,
}

impl User {
    /// Build a user from validated parts.
    pub fn new(username: Username, password_hash: PasswordHash, role: Role) -> Self {
        Self {
            username,
            password_hash,
            role,
        }
    }

    /// Unique account name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Stored credential hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Account role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Identity carried in the session once this user signs in.
    pub fn session_user(&self) -> SessionUser {
        SessionUser::new(self.username.clone(), self.role)
    }
}

/// Identity stored in the session cookie: the sole authorisation input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    username: Username,
    role: Role,
}

impl SessionUser {
    /// Build a session identity.
    pub fn new(username: Username, role: Role) -> Self {
        Self { username, role }
    }

    /// Signed-in account name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Signed-in account role.
    pub fn role(&self) -> Role {
        self.role
    }
}

#[cfg(test)]
mod tests;
