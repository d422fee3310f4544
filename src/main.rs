//! StaffHub Server — user directory and compensation records.
//!
//! Loads configuration, initializes logging and hands off to the API crate.

use tracing_subscriber::{EnvFilter, fmt};

use staffhub_core::config::{AppConfig, LogFormat};
use staffhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Starting StaffHub v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = staffhub_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from an explicit file or the environment layers.
///
/// `STAFFHUB_CONFIG` names a single file; otherwise `config/default.toml`
/// is merged with `config/{STAFFHUB_ENV}.toml`.
fn load_configuration() -> Result<AppConfig, AppError> {
    if let Ok(path) = std::env::var("STAFFHUB_CONFIG") {
        return AppConfig::load_file(&path);
    }
    let env = std::env::var("STAFFHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
