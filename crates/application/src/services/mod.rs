pub mod metric_submitter;
pub mod numeric;
pub mod stat_parser;
pub mod target_registry;

pub use metric_submitter::{MetricSubmitter, SubmitOutcome};
pub use target_registry::TargetRegistry;
