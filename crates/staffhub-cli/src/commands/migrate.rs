//! Database migration management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use staffhub_core::config::{AppConfig, StoreProvider};
use staffhub_core::error::AppError;
use staffhub_database::DatabasePool;
use staffhub_database::migration::{migration_status, run_migrations};

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Show migration status
    Status,
}

#[derive(Debug, Serialize, Tabled)]
struct MigrationRow {
    version: i64,
    description: String,
    status: String,
}

/// Execute migration commands
pub async fn execute(
    args: &MigrateArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    if config.database.provider != StoreProvider::Postgres {
        return Err(AppError::configuration(format!(
            "Migrations need the postgres provider, configured provider is '{}'",
            config.database.provider
        )));
    }
    let pool = DatabasePool::connect(&config.database).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            run_migrations(pool.pool()).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Status => {
            let rows: Vec<MigrationRow> = migration_status(pool.pool())
                .await?
                .into_iter()
                .map(|m| MigrationRow {
                    version: m.version,
                    description: m.description,
                    status: if m.applied { "applied" } else { "pending" }.to_string(),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    pool.close().await;
    Ok(())
}
