use crate::ports::{ObservationSink, TypeRegistry};
use crate::services::numeric::{parse_float_prefix, parse_int_prefix};
use chrono::Utc;
use pdns_stats_domain::metric_map;
use pdns_stats_domain::{MetricValue, Observation, SubmitError};
use std::sync::Arc;
use tracing::{debug, error};

/// What happened to one submitted statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Dispatched,
    /// Not in the metric map; dropped without complaint.
    Unknown,
    /// Known but rejected by the type registry or value conversion.
    Rejected,
}

/// Turns raw `(name, value)` pairs into typed observations for the sink.
pub struct MetricSubmitter {
    registry: Arc<dyn TypeRegistry>,
    sink: Arc<dyn ObservationSink>,
}

impl MetricSubmitter {
    pub fn new(registry: Arc<dyn TypeRegistry>, sink: Arc<dyn ObservationSink>) -> Self {
        Self { registry, sink }
    }

    /// Builds the observation for a statistic without dispatching it.
    ///
    /// Returns `Ok(None)` when the name is not in the metric map.
    pub fn observe(
        &self,
        instance: &str,
        name: &str,
        value: &str,
    ) -> Result<Option<Observation>, SubmitError> {
        let Some(entry) = metric_map::lookup(name) else {
            return Ok(None);
        };

        let spec = self
            .registry
            .get(entry.metric_type)
            .ok_or_else(|| SubmitError::UnknownType(entry.metric_type.to_string()))?;

        let [source] = spec.data_sources.as_slice() else {
            return Err(SubmitError::UnsupportedArity {
                metric_type: entry.metric_type.to_string(),
                arity: spec.arity(),
            });
        };

        let value = if source.kind.is_gauge() {
            parse_float_prefix(value)
                .map(MetricValue::Gauge)
                .ok_or_else(|| SubmitError::ValueConversion {
                    value: value.to_string(),
                    expected: "a floating point number",
                })?
        } else {
            parse_int_prefix(value)
                .map(MetricValue::Counter)
                .ok_or_else(|| SubmitError::ValueConversion {
                    value: value.to_string(),
                    expected: "an integer number",
                })?
        };

        Ok(Some(Observation {
            metric_type: entry.metric_type,
            instance: instance.to_string(),
            sub_dimension: entry.sub_dimension,
            value,
            timestamp: Utc::now(),
        }))
    }

    /// Converts and dispatches one statistic, logging anything that is dropped.
    pub fn submit(&self, instance: &str, name: &str, value: &str) -> SubmitOutcome {
        match self.observe(instance, name, value) {
            Ok(Some(observation)) => {
                self.sink.dispatch(&observation);
                SubmitOutcome::Dispatched
            }
            Ok(None) => {
                debug!(instance, name, value, "Not found in lookup table");
                SubmitOutcome::Unknown
            }
            Err(e) => {
                error!(instance, name, error = %e, "Dropping statistic");
                SubmitOutcome::Rejected
            }
        }
    }
}
