//! CLI configuration

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use domain_party::InMemoryUserDirectory;
use crate::error::CliError;

/// Prefix for environment variables (`SPLIT_LOG_LEVEL`, ...)
pub const ENV_PREFIX: &str = "SPLIT";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level filter, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
    /// JSON file with the users to register; the demo users are used if unset
    #[serde(default)]
    pub users_file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            users_file: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `SPLIT_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an explicit environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Builds the user directory named by `users_file`, or the demo users
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or holds invalid users
    pub fn load_directory(&self) -> Result<InMemoryUserDirectory, CliError> {
        match &self.users_file {
            Some(path) => {
                let file = File::open(path)?;
                let directory = InMemoryUserDirectory::from_json_reader(BufReader::new(file))?;
                tracing::info!(path = %path.display(), users = directory.users().count(), "users loaded");
                Ok(directory)
            }
            None => Ok(InMemoryUserDirectory::sample()),
        }
    }
}
