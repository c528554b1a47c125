//! Configuration management for Bookkeep

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::models::loan::LOAN_DAYS;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Database the session attaches to
    pub name: String,
    /// Schema holding the library tables, placed first on the search path
    pub schema: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoansConfig {
    pub duration_days: i64,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub loans: LoansConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables.
    ///
    /// The password is deliberately absent: it is asked for on every run.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/bookkeep").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // BOOKKEEP_DATABASE__HOST, BOOKKEEP_LOGGING__LEVEL, ...
            .add_source(
                Environment::with_prefix("BOOKKEEP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the menu could not act on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOAN_DAYS.contains(&self.loans.duration_days) {
            return Err(ConfigError::Message(format!(
                "loans.duration_days must be between {} and {}, got {}",
                LOAN_DAYS.start(),
                LOAN_DAYS.end(),
                self.loans.duration_days
            )));
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            username: "postgres".to_string(),
            name: "postgres".to_string(),
            schema: "bookkeep".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self { duration_days: 30 }
    }
}
