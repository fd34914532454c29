pub mod runner;
pub mod stats_read;

pub use runner::JobRunner;
pub use stats_read::StatsReadJob;
