use serde::{Deserialize, Serialize};
use std::path::Path;

use super::collector::CollectorConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::target::TargetDeclaration;

const LOCAL_CONFIG_PATH: &str = "pdns-stats.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/pdns-stats/config.toml";

/// Main configuration structure for pdns-stats
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Polling, transport and dispatch settings
    #[serde(default)]
    pub collector: CollectorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Control sockets to poll, in polling order
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetDeclaration>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. pdns-stats.toml in current directory
    /// 3. /etc/pdns-stats/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(interval) = overrides.interval_secs {
            self.collector.interval_secs = interval;
        }
        if let Some(local_socket) = overrides.local_socket {
            self.collector.local_socket = local_socket;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate global settings. Target declarations are checked one by one
    /// when the collector is configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collector.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "interval_secs cannot be 0".to_string(),
            ));
        }

        if self.collector.query_timeout_ms == Some(0) {
            return Err(ConfigError::Validation(
                "query_timeout_ms cannot be 0".to_string(),
            ));
        }

        if self.collector.local_socket.is_empty() {
            return Err(ConfigError::Validation(
                "local_socket cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub interval_secs: Option<u64>,
    pub local_socket: Option<String>,
    pub log_level: Option<String>,
}
