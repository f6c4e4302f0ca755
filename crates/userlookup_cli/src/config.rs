//! Logging settings for the CLI process.

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use userlookup_core::{default_log_level, ConfigResult};

/// Environment prefix for logging settings, e.g. `USERLOOKUP_LOG_LEVEL`.
pub const LOG_ENV_PREFIX: &str = "USERLOOKUP_LOG_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    /// Absolute directory for rolling log files; stderr when unset.
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> ConfigResult<Self> {
        let figment = Figment::from(Serialized::defaults(LogConfig::default()))
            .merge(Env::prefixed(LOG_ENV_PREFIX));
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::LogConfig;
    use figment::Jail;

    #[test]
    fn defaults_to_stderr_with_build_level() {
        Jail::expect_with(|_jail| {
            let config = LogConfig::from_env().expect("defaults should load");
            assert_eq!(config, LogConfig::default());
            assert_eq!(config.dir, None);
            Ok(())
        });
    }

    #[test]
    fn reads_level_and_dir_from_environment() {
        Jail::expect_with(|jail| {
            jail.set_env("USERLOOKUP_LOG_LEVEL", "warn");
            jail.set_env("USERLOOKUP_LOG_DIR", "/var/log/userlookup");
            let config = LogConfig::from_env().expect("config should load");
            assert_eq!(config.level, "warn");
            assert_eq!(config.dir.as_deref(), Some("/var/log/userlookup"));
            Ok(())
        });
    }
}
