//! Server settings loaded via OrthoConfig.
//!
//! Values come from `LECTERN_*` environment variables and matching CLI
//! flags (`--host`, `--port`, `--data-dir`), with CLI flags taking
//! precedence.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Interface bound when none is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Port bound when none is configured.
pub const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_DIR: &str = ".";

/// Listener address and the directory holding the JSON store files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LECTERN")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 5000)]
    pub port: u16,
    /// Directory containing `users.json`, `lectures.json` and
    /// `student_notes.json`.
    pub data_dir: Option<PathBuf>,
}

impl ServerSettings {
    /// Configured interface, falling back to [`DEFAULT_HOST`].
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port; [`DEFAULT_PORT`] unless overridden.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Configured store directory, falling back to the working directory.
    pub fn data_dir(&self) -> &Path {
        self.data_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DATA_DIR))
    }

    /// `(host, port)` pair accepted by `HttpServer::bind`.
    pub fn bind_address(&self) -> (String, u16) {
        (self.host().to_owned(), self.port())
    }
}
