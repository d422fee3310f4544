//! Start the StaffHub server.

use clap::Args;

use crate::output;
use staffhub_core::config::AppConfig;
use staffhub_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip database migrations on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if args.skip_migrations {
        config.database.run_migrations = false;
    }

    println!("Starting StaffHub server...");
    output::print_kv("Address", &config.server.bind_address());
    output::print_kv("Store", &config.database.provider.to_string());

    staffhub_api::run_server(config).await
}
