//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use staffhub_core::config::AppConfig;
use staffhub_core::error::AppError;

/// StaffHub — user directory and compensation records
#[derive(Debug, Parser)]
#[command(name = "staffhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the StaffHub server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User management
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, config, self.format).await,
            Commands::User(args) => user::execute(args, config, self.format).await,
        }
    }
}

/// Helper: load configuration from file plus `STAFFHUB__*` overrides
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_file(config_path)
}
