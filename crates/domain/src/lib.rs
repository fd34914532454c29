//! pdns-stats domain layer
pub mod config;
pub mod dialect;
pub mod errors;
pub mod metric_map;
pub mod metric_type;
pub mod observation;
pub mod target;

pub use config::{CliOverrides, Config, ConfigError, TargetDeclaration};
pub use dialect::{Dialect, TransportKind};
pub use errors::{SubmitError, TransportError, TransportStep};
pub use metric_map::MetricMapEntry;
pub use metric_type::{DataSource, DataSourceKind, TypeSpec};
pub use observation::{MetricValue, Observation};
pub use target::Target;
