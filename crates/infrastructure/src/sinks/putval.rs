use pdns_stats_application::ports::ObservationSink;
use pdns_stats_domain::Observation;
use std::io::Write;
use std::sync::Mutex;
use tracing::error;

const PLUGIN: &str = "powerdns";

/// Writes observations as collectd plain-text protocol lines:
///
/// ```text
/// PUTVAL "ns1/powerdns-main/dns_question-udp" interval=10 1700000000:42
/// ```
pub struct PutvalSink<W> {
    writer: Mutex<W>,
    hostname: String,
    interval_secs: u64,
}

impl<W: Write + Send> PutvalSink<W> {
    pub fn new(writer: W, hostname: impl Into<String>, interval_secs: u64) -> Self {
        Self {
            writer: Mutex::new(writer),
            hostname: hostname.into(),
            interval_secs,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// `host/plugin-instance/type[-type_instance]`
pub fn identifier(hostname: &str, observation: &Observation) -> String {
    let mut id = format!(
        "{}/{}-{}/{}",
        hostname, PLUGIN, observation.instance, observation.metric_type
    );
    if let Some(sub) = observation.sub_dimension {
        id.push('-');
        id.push_str(sub);
    }
    id
}

impl<W: Write + Send> ObservationSink for PutvalSink<W> {
    fn dispatch(&self, observation: &Observation) {
        let line = format!(
            "PUTVAL \"{}\" interval={} {}:{}\n",
            identifier(&self.hostname, observation),
            self.interval_secs,
            observation.timestamp.timestamp(),
            observation.value
        );

        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Err(e) = writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
        {
            error!(error = %e, "Failed to write observation");
        }
    }
}
