//! Database connection configuration.
//!
//! # Responsibility
//! - Describe how to reach the relational backend as an explicit value.
//! - Load that value from serialized defaults merged with `USERLOOKUP_DB_*`
//!   environment variables.
//!
//! # Invariants
//! - Configuration is passed to the opener explicitly; there is no global state.
//! - The password never appears in `Debug` output or log descriptors.

use figment::providers::{Env, Serialized};
use figment::Figment;
use postgres::config::SslMode as PgSslMode;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::time::Duration;

/// Environment prefix for database settings, e.g. `USERLOOKUP_DB_HOST`.
pub const DB_ENV_PREFIX: &str = "USERLOOKUP_DB_";

/// Text fields read verbatim; figment's `Env` would turn `2024` into a number.
const VERBATIM_KEYS: [&str; 4] = ["host", "user", "password", "database"];

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Extract(Box<figment::Error>),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extract(err) => write!(f, "failed to load configuration: {err}"),
            Self::Invalid(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Extract(err) => Some(err.as_ref()),
            Self::Invalid(_) => None,
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(value: figment::Error) -> Self {
        Self::Extract(Box::new(value))
    }
}

/// Transport-security mode negotiated with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    #[default]
    Disable,
    Prefer,
    Require,
}

impl SslMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::Prefer => "prefer",
            Self::Require => "require",
        }
    }
}

impl From<SslMode> for PgSslMode {
    fn from(value: SslMode) -> Self {
        match value {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
        }
    }
}

/// Connection settings for the PostgreSQL backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub sslmode: SslMode,
    /// `None` keeps the client library default.
    pub connect_timeout_secs: Option<u64>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "youruser".to_string(),
            password: "yourpassword".to_string(),
            database: "yourdb".to_string(),
            sslmode: SslMode::Disable,
            connect_timeout_secs: None,
        }
    }
}

impl Debug for DbConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("sslmode", &self.sslmode)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl DbConfig {
    /// Defaults merged with `USERLOOKUP_DB_*` environment variables.
    ///
    /// `HOST`, `USER`, `PASSWORD` and `DATABASE` are taken as raw text, so
    /// values like `007` or `true` keep their exact spelling.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(DbConfig::default()))
            .merge(Env::prefixed(DB_ENV_PREFIX).ignore(&VERBATIM_KEYS));
        for key in VERBATIM_KEYS {
            let var = format!("{DB_ENV_PREFIX}{}", key.to_ascii_uppercase());
            if let Ok(value) = std::env::var(&var) {
                figment = figment.merge((key, value));
            }
        }
        figment
    }

    /// Loads and validates configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Extracts and validates configuration from an arbitrary provider stack.
    pub fn from_figment(figment: &Figment) -> ConfigResult<Self> {
        let config: DbConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that can never produce a usable connection.
    ///
    /// # Errors
    /// - Returns `ConfigError::Invalid` when `host`, `user` or `database` is blank.
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("host", &self.host),
            ("user", &self.user),
            ("database", &self.database),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} cannot be empty")));
            }
        }
        Ok(())
    }

    /// Descriptor safe for logs: every field except the password.
    pub fn redacted_descriptor(&self) -> String {
        format!(
            "host={} port={} user={} dbname={} sslmode={}",
            self.host,
            self.port,
            self.user,
            self.database,
            self.sslmode.as_str()
        )
    }

    /// Builds the client library configuration for this descriptor.
    pub fn to_postgres_config(&self) -> postgres::Config {
        let mut config = postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .user(&self.user)
            .password(&self.password)
            .dbname(&self.database)
            .ssl_mode(self.sslmode.into())
            .application_name(env!("CARGO_PKG_NAME"));
        if let Some(secs) = self.connect_timeout_secs {
            config.connect_timeout(Duration::from_secs(secs));
        }
        config
    }
}
