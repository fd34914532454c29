pub mod collector;
pub mod errors;
pub mod logging;
pub mod root;
pub mod target;

pub use collector::{CollectorConfig, OutputKind};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use target::TargetDeclaration;
