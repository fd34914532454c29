use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Gauge(f64),
    Counter(i64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Gauge(v) => write!(f, "{}", v),
            MetricValue::Counter(v) => write!(f, "{}", v),
        }
    }
}

/// A typed, dimensioned value ready for the dispatch sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub metric_type: &'static str,
    pub instance: String,
    pub sub_dimension: Option<&'static str>,
    pub value: MetricValue,
    pub timestamp: DateTime<Utc>,
}
