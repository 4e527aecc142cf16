//! HTTP server configuration object.

use std::path::{Path, PathBuf};

use lectern::inbound::http::session_config::SessionSettings;

/// Everything `create_server` needs besides the health state.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: (String, u16),
    pub(crate) data_dir: PathBuf,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: (String, u16), data_dir: PathBuf) -> Self {
        Self {
            session,
            bind_addr,
            data_dir,
        }
    }

    /// Directory holding the JSON store files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
