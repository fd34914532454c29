use pdns_stats_domain::Observation;

/// Port for the metrics backend that receives typed observations.
pub trait ObservationSink: Send + Sync {
    /// Hands one observation to the backend. Failures are the sink's to log.
    fn dispatch(&self, observation: &Observation);
}
