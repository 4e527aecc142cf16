//! `users.json` adapter for [`UserRepository`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::json_document::{DocumentError, JsonDocument};
use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, Username};

/// File name used inside the data directory.
pub const USERS_FILE: &str = "users.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct UsersDocument {
    users: Vec<User>,
}

impl From<DocumentError> for UserPersistenceError {
    fn from(error: DocumentError) -> Self {
        match error {
            DocumentError::Io { .. } => Self::io(error.to_string()),
            DocumentError::Corrupt { .. } => Self::corrupt(error.to_string()),
        }
    }
}

/// Account repository persisted as `{"users": [...]}`.
#[derive(Debug)]
pub struct JsonUserRepository {
    document: JsonDocument<UsersDocument>,
}

impl JsonUserRepository {
    /// Repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: JsonDocument::new(path),
        }
    }

    /// Repository backed by [`USERS_FILE`] inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(USERS_FILE))
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        let document = self.document.read().await?;
        Ok(document
            .users
            .into_iter()
            .find(|user| user.username() == username))
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        self.document
            .update(|document| {
                if document
                    .users
                    .iter()
                    .any(|existing| existing.username() == user.username())
                {
                    return Err(UserPersistenceError::duplicate(user.username().to_string()));
                }
                document.users.push(user.clone());
                Ok(())
            })
            .await
    }
}
