use pdns_stats_application::ports::ObservationSink;
use pdns_stats_domain::Observation;
use tracing::info;

/// Emits every observation as an `info` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ObservationSink for TracingSink {
    fn dispatch(&self, observation: &Observation) {
        info!(
            metric_type = observation.metric_type,
            instance = %observation.instance,
            sub_dimension = observation.sub_dimension.unwrap_or(""),
            value = %observation.value,
            timestamp = %observation.timestamp,
            "observation"
        );
    }
}
