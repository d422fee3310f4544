//! User management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use staffhub_auth::password::PasswordHasher;
use staffhub_auth::rbac::RbacEnforcer;
use staffhub_core::config::{AppConfig, StoreProvider};
use staffhub_core::error::AppError;
use staffhub_database::RecordStore;
use staffhub_entity::user::User;
use staffhub_service::user::{AdminUserService, NewUser};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a superuser account
    CreateSuperuser {
        /// Login
        #[arg(long)]
        login: String,
        /// Given name
        #[arg(long)]
        name: String,
        /// Family name
        #[arg(long)]
        surname: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Show a user by login
    Show {
        /// Login
        login: String,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Login
    login: String,
    /// Full name
    name: String,
    /// Email
    email: String,
    /// Roles
    roles: String,
    /// Status
    status: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.user_id.to_string(),
            login: u.login.clone(),
            name: format!("{} {}", u.name, u.surname),
            email: u.email.clone(),
            roles: u.roles.to_tags().join(", "),
            status: if u.is_active { "active" } else { "inactive" }.to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    if config.database.provider == StoreProvider::Memory {
        output::print_warning("The memory provider keeps nothing after this command exits.");
    }
    let store = RecordStore::connect(&config.database).await?;

    let result = match &args.command {
        UserCommand::CreateSuperuser {
            login,
            name,
            surname,
            email,
            password,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
            let admin = AdminUserService::new(store.clone(), hasher, Arc::new(RbacEnforcer::new()));
            admin
                .create_superuser(NewUser {
                    login: login.clone(),
                    name: name.clone(),
                    surname: surname.clone(),
                    email: email.clone(),
                    password,
                })
                .await
                .map(|user| {
                    output::print_success(&format!("Superuser '{}' created", user.login));
                    output::print_list(&[UserRow::from(&user)], format);
                })
        }
        UserCommand::Show { login } => store
            .users()
            .find_by_login(login)
            .await
            .and_then(|found| {
                found.ok_or_else(|| AppError::not_found(format!("User '{login}' not found")))
            })
            .map(|user| output::print_list(&[UserRow::from(&user)], format)),
    };

    store.close().await;
    result
}
