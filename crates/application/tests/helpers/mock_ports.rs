#![allow(dead_code)]

use async_trait::async_trait;
use pdns_stats_application::ports::{ObservationSink, StatTransport, TypeRegistry};
use pdns_stats_application::services::MetricSubmitter;
use pdns_stats_domain::{
    DataSource, DataSourceKind, Observation, Target, TransportError, TransportStep, TypeSpec,
};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum Reply {
    Text(String),
    Fail(TransportStep),
}

/// Transport that answers per instance label and records the query order.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, instance: &str, text: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(instance.to_string(), Reply::Text(text.to_string()));
        self
    }

    pub fn fail(self, instance: &str, step: TransportStep) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(instance.to_string(), Reply::Fail(step));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatTransport for MockTransport {
    async fn query(&self, target: &Target) -> Result<String, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push(target.instance().to_string());

        let reply = self.replies.lock().unwrap().get(target.instance()).cloned();
        match reply {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail(step)) => Err(TransportError::new(
                step,
                target.socket_path(),
                io::Error::from(io::ErrorKind::ConnectionRefused),
            )),
            None => Err(TransportError::new(
                TransportStep::Connect,
                target.socket_path(),
                io::Error::from(io::ErrorKind::NotFound),
            )),
        }
    }
}

/// Sink that keeps every dispatched observation.
#[derive(Default)]
pub struct RecordingSink {
    observations: Mutex<Vec<Observation>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observations(&self) -> Vec<Observation> {
        self.observations.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.observations.lock().unwrap().len()
    }
}

impl ObservationSink for RecordingSink {
    fn dispatch(&self, observation: &Observation) {
        self.observations.lock().unwrap().push(observation.clone());
    }
}

/// Registry with a fixed set of types.
#[derive(Default)]
pub struct MockTypeRegistry {
    types: HashMap<String, TypeSpec>,
}

impl MockTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, name: &str, kinds: &[DataSourceKind]) -> Self {
        let data_sources = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| DataSource {
                name: format!("ds{}", i),
                kind: *kind,
                min: None,
                max: None,
            })
            .collect();
        self.types.insert(
            name.to_string(),
            TypeSpec {
                name: name.to_string(),
                data_sources,
            },
        );
        self
    }

    /// The types the metric map refers to, with the same shapes as collectd's
    /// `types.db`.
    pub fn standard() -> Self {
        use DataSourceKind::*;
        Self::new()
            .with_type("cache_result", &[Derive])
            .with_type("cache_size", &[Gauge])
            .with_type("counter", &[Counter])
            .with_type("cpu", &[Derive])
            .with_type("dns_answer", &[Derive])
            .with_type("dns_qtype", &[Derive])
            .with_type("dns_question", &[Derive])
            .with_type("dns_rcode", &[Derive])
            .with_type("io_packets", &[Derive, Derive])
            .with_type("latency", &[Gauge])
    }
}

impl TypeRegistry for MockTypeRegistry {
    fn get(&self, type_name: &str) -> Option<&TypeSpec> {
        self.types.get(type_name)
    }
}

pub fn make_submitter(registry: MockTypeRegistry) -> (MetricSubmitter, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let submitter = MetricSubmitter::new(Arc::new(registry), sink.clone());
    (submitter, sink)
}
