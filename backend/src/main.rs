//! Lectern entry-point: loads settings, wires adapters and runs the server.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use lectern::config::ServerSettings;
use lectern::inbound::http::health::HealthState;
use lectern::inbound::http::session_config::{BuildMode, session_settings_from_env};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("invalid server settings: {err}")))?;
    let env = DefaultEnv::new();
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;

    let config = ServerConfig::new(
        session,
        settings.bind_address(),
        settings.data_dir().to_path_buf(),
    );
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
