//! RSVP registry server binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `rsvp-config.yaml` (defaults if absent,
//!    `RSVP_HOST`/`RSVP_PORT` override)
//! 2. Initialize structured logging (tracing)
//! 3. Build the shared application state
//! 4. Serve HTTP until `Ctrl-C` or `SIGTERM`

mod error;

use std::path::Path;
use std::sync::Arc;

use rsvp_api::{AppState, ServerConfig};
use rsvp_core::config::{LogFormat, LoggingConfig, RsvpConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Config file looked up in the working directory.
const CONFIG_PATH: &str = "rsvp-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the server fails
/// to bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    init_logging(&config.logging);
    if !Path::new(CONFIG_PATH).exists() {
        info!("Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        unranked_roles = ?config.ranking.unranked_roles,
        "Configuration loaded"
    );

    let state = Arc::new(AppState::new(config.ranking.unranked_roles));
    let server_config = ServerConfig::from(&config.server);

    rsvp_api::start_server(&server_config, state)
        .await
        .map_err(AppError::from)?;

    info!("rsvp-server exited cleanly");
    Ok(())
}

/// Load configuration from `rsvp-config.yaml`, or defaults if the file does
/// not exist. Environment overrides apply in both cases.
fn load_config() -> Result<RsvpConfig, AppError> {
    let config_path = Path::new(CONFIG_PATH);
    let config = if config_path.exists() {
        RsvpConfig::from_file(config_path)?
    } else {
        RsvpConfig::from_env()?
    };
    Ok(config)
}

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over
/// the configured level.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
