//! Single-writer JSON document file.
//!
//! Each [`JsonDocument`] owns one file and one async mutex. Every read and
//! every read-modify-write runs under that mutex, and saves go to a sibling
//! temporary file that is renamed over the target, so a crash mid-write
//! leaves the previous document intact.

use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Failures reading or writing a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Filesystem operation failed.
    #[error("{operation} {path}: {source}")]
    Io {
        /// What was being attempted.
        operation: &'static str,
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// File contents did not decode as the expected document.
    #[error("failed to parse {path}: {source}")]
    Corrupt {
        /// File involved.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

impl DocumentError {
    fn io(operation: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A JSON file holding one document of type `T`.
///
/// Absent files are created holding `T::default()` on first access.
#[derive(Debug)]
pub struct JsonDocument<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _document: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Bind a document to `path`. Nothing is touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _document: PhantomData,
        }
    }

    /// File backing this document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current contents.
    pub async fn read(&self) -> Result<T, DocumentError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Load, apply `mutate`, and persist the result if `mutate` succeeds.
    ///
    /// The whole sequence holds the document lock, so concurrent updates
    /// are applied one after another and none is lost. When `mutate`
    /// fails nothing is written.
    pub async fn update<R, E, F>(&self, mutate: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E> + Send,
        E: From<DocumentError>,
    {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;
        let outcome = mutate(&mut document)?;
        self.store(&document).await?;
        Ok(outcome)
    }

    async fn load(&self) -> Result<T, DocumentError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| DocumentError::Corrupt {
                path: self.path.clone(),
                source,
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "initialising missing document");
                let document = T::default();
                self.store(&document).await?;
                Ok(document)
            }
            Err(err) => Err(DocumentError::io("read", &self.path, err)),
        }
    }

    async fn store(&self, document: &T) -> Result<(), DocumentError> {
        let bytes = serde_json::to_vec_pretty(document).map_err(|source| {
            DocumentError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| DocumentError::io("create directory for", &self.path, err))?;
        }

        let staging = self.staging_path();
        tokio::fs::write(&staging, &bytes)
            .await
            .map_err(|err| DocumentError::io("write", &staging, err))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|err| DocumentError::io("replace", &self.path, err))?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "document saved");
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
