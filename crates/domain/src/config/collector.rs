use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_LOCAL_SOCKET: &str = "/var/run/pdns-stats-powerdns";

/// Where observations are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// collectd plain-text `PUTVAL` lines on stdout
    #[default]
    Putval,
    /// One tracing event per observation
    Log,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectorConfig {
    /// Seconds between two read ticks
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Local path the datagram transport binds before talking to a recursor
    #[serde(default = "default_local_socket")]
    pub local_socket: String,

    /// Upper bound for a single control-socket exchange; unbounded when absent
    #[serde(default)]
    pub query_timeout_ms: Option<u64>,

    /// collectd `types.db` file; built-in types are used when absent
    #[serde(default)]
    pub types_db: Option<String>,

    #[serde(default)]
    pub output: OutputKind,

    /// Host label for dispatched values; defaults to the system hostname
    #[serde(default)]
    pub hostname: Option<String>,
}

impl CollectorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            local_socket: default_local_socket(),
            query_timeout_ms: None,
            types_db: None,
            output: OutputKind::default(),
            hostname: None,
        }
    }
}

fn default_interval_secs() -> u64 {
    10
}

fn default_local_socket() -> String {
    DEFAULT_LOCAL_SOCKET.to_string()
}
