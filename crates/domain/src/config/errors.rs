#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Target declaration needs exactly one `{0}` string argument")]
    MissingArgument(&'static str),

    #[error("Unknown dialect `{0}`, expected `server` or `recursor`")]
    UnknownDialect(String),

    #[error("Option `{option}` not allowed in target `{instance}`")]
    UnknownOption { instance: String, option: String },

    #[error("Option `{option}` of target `{instance}` must not be empty")]
    EmptyValue {
        instance: String,
        option: &'static str,
    },

    #[error("Option `{option}` of target `{instance}` needs exactly one string argument")]
    NotAString {
        instance: String,
        option: &'static str,
    },

    #[error("Duplicate target instance `{0}`")]
    DuplicateInstance(String),
}
