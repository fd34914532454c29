use super::errors::ConfigError;
use crate::dialect::Dialect;
use crate::target::Target;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `[[target]]` table as written by the operator.
///
/// Fields are kept as raw TOML values so that a missing, misspelled or
/// wrongly typed option only rejects its own declaration instead of the whole
/// file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TargetDeclaration {
    #[serde(default, alias = "Dialect")]
    pub dialect: Option<toml::Value>,

    #[serde(default, alias = "Instance")]
    pub instance: Option<toml::Value>,

    /// Overrides the dialect's default request text
    #[serde(default, alias = "Command")]
    pub command: Option<toml::Value>,

    /// Overrides the dialect's default control socket path
    #[serde(default, alias = "Socket")]
    pub socket: Option<toml::Value>,

    /// Keys that are not options of a target
    #[serde(flatten)]
    pub unknown: BTreeMap<String, toml::Value>,
}

impl TargetDeclaration {
    pub fn new(dialect: Dialect, instance: &str) -> Self {
        Self {
            dialect: Some(toml::Value::String(dialect.as_str().to_string())),
            instance: Some(toml::Value::String(instance.to_string())),
            ..Self::default()
        }
    }

    pub fn with_command(mut self, command: &str) -> Self {
        self.command = Some(toml::Value::String(command.to_string()));
        self
    }

    pub fn with_socket(mut self, socket: &str) -> Self {
        self.socket = Some(toml::Value::String(socket.to_string()));
        self
    }

    /// Validates the declaration and builds the immutable target it describes.
    pub fn to_target(&self) -> Result<Target, ConfigError> {
        let dialect = match &self.dialect {
            Some(toml::Value::String(name)) => name
                .parse::<Dialect>()
                .map_err(|_| ConfigError::UnknownDialect(name.clone()))?,
            _ => return Err(ConfigError::MissingArgument("dialect")),
        };

        let instance = match &self.instance {
            Some(toml::Value::String(instance)) if !instance.is_empty() => instance.as_str(),
            _ => return Err(ConfigError::MissingArgument("instance")),
        };

        if let Some(option) = self.unknown.keys().next() {
            return Err(ConfigError::UnknownOption {
                instance: instance.to_string(),
                option: option.clone(),
            });
        }

        let mut target = Target::new(instance, dialect);

        if let Some(command) = string_option(instance, "command", self.command.as_ref())? {
            if command.trim().is_empty() {
                return Err(ConfigError::EmptyValue {
                    instance: instance.to_string(),
                    option: "command",
                });
            }
            target = target.with_command(command);
        }

        if let Some(socket) = string_option(instance, "socket", self.socket.as_ref())? {
            if socket.is_empty() {
                return Err(ConfigError::EmptyValue {
                    instance: instance.to_string(),
                    option: "socket",
                });
            }
            target = target.with_socket_path(socket);
        }

        Ok(target)
    }
}

fn string_option<'a>(
    instance: &str,
    option: &'static str,
    value: Option<&'a toml::Value>,
) -> Result<Option<&'a str>, ConfigError> {
    match value {
        None => Ok(None),
        Some(toml::Value::String(value)) => Ok(Some(value.as_str())),
        Some(_) => Err(ConfigError::NotAString {
            instance: instance.to_string(),
            option,
        }),
    }
}
