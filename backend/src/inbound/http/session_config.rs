//! Session cookie configuration.
//!
//! Settings come from the environment through [`mockable::Env`] so tests
//! can supply values without touching the process environment. Debug builds
//! fall back to permissive defaults with a warning; release builds demand
//! every toggle explicitly and a long enough signing key.

use std::path::PathBuf;

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite, time::Duration};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroizing;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "session";
/// Lifetime of a persistent session cookie.
pub const SESSION_TTL: Duration = Duration::hours(2);

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const SESSION_KEY_MIN_LEN: usize = 64;
// `Key::derive_from` panics below this length.
const KEY_DERIVE_MIN_LEN: usize = 32;
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const SAMESITE_ENV: &str = "SESSION_SAMESITE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";
const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// Build mode for session configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Defaults are tolerated and logged.
    Debug,
    /// Every toggle must be present and valid.
    Release,
}

impl BuildMode {
    /// Mode matching `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lectern::inbound::http::session_config::BuildMode;
    ///
    /// let expected = if cfg!(debug_assertions) { BuildMode::Debug } else { BuildMode::Release };
    /// assert_eq!(BuildMode::from_debug_assertions(), expected);
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// Validated cookie-session settings.
#[derive(Clone)]
pub struct SessionSettings {
    /// Signing and encryption key.
    pub key: Key,
    /// Whether cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
    /// `SameSite` policy.
    pub same_site: SameSite,
}

impl SessionSettings {
    /// Session middleware: private (encrypted) cookie, HTTP-only, expiring
    /// after [`SESSION_TTL`].
    pub fn middleware(&self) -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), self.key.clone())
            .cookie_name(SESSION_COOKIE_NAME.to_owned())
            .cookie_path("/".to_owned())
            .cookie_http_only(true)
            .cookie_secure(self.cookie_secure)
            .cookie_same_site(self.same_site)
            .cookie_content_security(CookieContentSecurity::Private)
            .session_lifecycle(PersistentSession::default().session_ttl(SESSION_TTL))
            .build()
    }
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv {
        /// Name of the missing variable.
        name: &'static str,
    },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        /// Name of the variable.
        name: &'static str,
        /// Value that was supplied.
        value: String,
        /// Description of the accepted values.
        expected: &'static str,
    },
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        /// Path of the key file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The key file is shorter than the build mode allows.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        /// Path of the key file.
        path: PathBuf,
        /// Actual key length in bytes.
        length: usize,
        /// Minimum required length in bytes.
        min_len: usize,
    },
    /// `SameSite=None` without `Secure` in a release build.
    #[error("SESSION_SAMESITE=None requires SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    /// Ephemeral keys requested in a release build.
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Environment reader applying the build mode's fallback policy.
struct SessionEnv<'a, E> {
    env: &'a E,
    mode: BuildMode,
}

impl<E: Env> SessionEnv<'_, E> {
    /// Value of `name`, or `debug_default` in debug builds when it is
    /// missing or fails to parse.
    fn parsed<T>(
        &self,
        name: &'static str,
        expected: &'static str,
        debug_default: T,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, SessionConfigError> {
        let Some(value) = self.env.string(name) else {
            if self.mode == BuildMode::Debug {
                warn!(variable = name, "not set; using debug default");
                return Ok(debug_default);
            }
            return Err(SessionConfigError::MissingEnv { name });
        };
        match parse(&value) {
            Some(parsed) => Ok(parsed),
            None if self.mode == BuildMode::Debug => {
                warn!(variable = name, value = %value, "invalid; using debug default");
                Ok(debug_default)
            }
            None => Err(SessionConfigError::InvalidEnv {
                name,
                value,
                expected,
            }),
        }
    }

    fn key_path(&self) -> PathBuf {
        self.env
            .string(KEY_FILE_ENV)
            .map_or_else(|| PathBuf::from(SESSION_KEY_DEFAULT_PATH), PathBuf::from)
    }
}

/// Build session settings from environment variables and build mode.
///
/// # Examples
///
/// ```rust
/// use lectern::inbound::http::session_config::{BuildMode, session_settings_from_env};
/// use mockable::MockEnv;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let key_path = std::env::temp_dir().join("lectern_session_key_example");
/// std::fs::write(&key_path, vec![b'a'; 64])?;
///
/// let key_path = key_path.to_string_lossy().into_owned();
/// let mut env = MockEnv::new();
/// env.expect_string().returning(move |name| match name {
///     "SESSION_KEY_FILE" => Some(key_path.clone()),
///     "SESSION_COOKIE_SECURE" => Some("1".to_owned()),
///     "SESSION_SAMESITE" => Some("Strict".to_owned()),
///     "SESSION_ALLOW_EPHEMERAL" => Some("0".to_owned()),
///     _ => None,
/// });
///
/// let settings = session_settings_from_env(&env, BuildMode::Release)?;
/// assert!(settings.cookie_secure);
/// # Ok(())
/// # }
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let reader = SessionEnv { env, mode };

    let cookie_secure = reader.parsed(COOKIE_SECURE_ENV, BOOL_EXPECTED, true, parse_bool)?;

    let debug_same_site = SameSite::Lax;
    let same_site = reader.parsed(SAMESITE_ENV, SAMESITE_EXPECTED, debug_same_site, parse_same_site)?;
    if same_site == SameSite::None && !cookie_secure {
        if mode == BuildMode::Release {
            return Err(SessionConfigError::InsecureSameSiteNone);
        }
        warn!("SESSION_SAMESITE=None without SESSION_COOKIE_SECURE; browsers may drop the cookie");
    }

    let allow_ephemeral = reader.parsed(ALLOW_EPHEMERAL_ENV, BOOL_EXPECTED, false, parse_bool)?;
    if allow_ephemeral && mode == BuildMode::Release {
        return Err(SessionConfigError::EphemeralNotAllowed);
    }

    let key = load_key(reader.key_path(), mode, allow_ephemeral)?;

    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

fn load_key(path: PathBuf, mode: BuildMode, allow_ephemeral: bool) -> Result<Key, SessionConfigError> {
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => Zeroizing::new(bytes),
        Err(error) if mode == BuildMode::Debug || allow_ephemeral => {
            warn!(path = %path.display(), error = %error, "using temporary session key (dev only)");
            return Ok(Key::generate());
        }
        Err(source) => return Err(SessionConfigError::KeyRead { path, source }),
    };

    let min_len = match mode {
        BuildMode::Release => SESSION_KEY_MIN_LEN,
        BuildMode::Debug => KEY_DERIVE_MIN_LEN,
    };
    if bytes.len() >= min_len {
        return Ok(Key::derive_from(&bytes));
    }
    if mode == BuildMode::Debug {
        warn!(path = %path.display(), length = bytes.len(), "session key too short; using temporary key");
        return Ok(Key::generate());
    }
    Err(SessionConfigError::KeyTooShort {
        path,
        length: bytes.len(),
        min_len,
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn parse_same_site(value: &str) -> Option<SameSite> {
    match value.to_ascii_lowercase().as_str() {
        "lax" => Some(SameSite::Lax),
        "strict" => Some(SameSite::Strict),
        "none" => Some(SameSite::None),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
