//! CLI entry point.
//!
//! # Responsibility
//! - Wire config, connection, repository and service in fixed order.
//! - Look up one user and print it, or report the error and exit non-zero.

mod config;
mod error;

use config::LogConfig;
use error::CliError;
use log::{error, info, warn};
use std::process::ExitCode;
use userlookup_core::db::{close_postgres, open_postgres};
use userlookup_core::{init_logging, DbConfig, PostgresUserRepository, UserId, UserService};

const LOOKUP_USER_ID: UserId = 1;

fn main() -> ExitCode {
    // A missing .env file is normal; real environment variables still apply.
    dotenvy::dotenv().ok();

    match run() {
        Ok(username) => {
            println!("Retrieved user: {username}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, CliError> {
    let log_config = LogConfig::from_env()?;
    init_logging(&log_config.level, log_config.dir.as_deref()).map_err(CliError::Logging)?;

    let db_config = DbConfig::from_env()?;
    let mut client = open_postgres(&db_config).map_err(CliError::Connection)?;

    let lookup = {
        let mut service = UserService::new(PostgresUserRepository::new(&mut client));
        service.get_user(LOOKUP_USER_ID)
    };

    // Close on every path once the connection exists; a close failure does
    // not mask the lookup outcome.
    if let Err(err) = close_postgres(client) {
        warn!("event=db_close module=cli status=ignored error={err}");
    }

    let username = lookup?;
    info!("event=app_exit module=cli status=ok id={LOOKUP_USER_ID}");
    Ok(username)
}
