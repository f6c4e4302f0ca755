//! Top-level error for one CLI run.

use std::error::Error;
use std::fmt::{Display, Formatter};
use userlookup_core::{ConfigError, DbError, RepoError};

#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Logging(String),
    Connection(DbError),
    Lookup(RepoError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(message) => write!(f, "failed to initialize logging: {message}"),
            Self::Connection(err) => write!(f, "failed to connect to the database: {err}"),
            Self::Lookup(err) => write!(f, "error retrieving user: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(_) => None,
            Self::Connection(err) => Some(err),
            Self::Lookup(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Lookup(value)
    }
}
