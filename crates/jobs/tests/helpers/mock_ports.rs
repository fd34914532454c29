#![allow(dead_code)]
use async_trait::async_trait;
use pdns_stats_application::ports::{ObservationSink, StatTransport, TypeRegistry};
use pdns_stats_application::services::MetricSubmitter;
use pdns_stats_application::use_cases::CollectStatsUseCase;
use pdns_stats_domain::{
    DataSource, DataSourceKind, Dialect, Observation, Target, TargetDeclaration, TransportError,
    TypeSpec,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Answers every query with the same server reply and counts the calls.
pub struct CountingTransport {
    reply: String,
    calls: AtomicUsize,
}

impl CountingTransport {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatTransport for CountingTransport {
    async fn query(&self, _target: &Target) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

pub struct SingleTypeRegistry {
    spec: TypeSpec,
}

impl SingleTypeRegistry {
    pub fn dns_question() -> Self {
        Self {
            spec: TypeSpec {
                name: "dns_question".to_string(),
                data_sources: vec![DataSource {
                    name: "value".to_string(),
                    kind: DataSourceKind::Derive,
                    min: Some(0.0),
                    max: None,
                }],
            },
        }
    }
}

impl TypeRegistry for SingleTypeRegistry {
    fn get(&self, type_name: &str) -> Option<&TypeSpec> {
        (type_name == self.spec.name).then_some(&self.spec)
    }
}

#[derive(Default)]
pub struct CollectingSink {
    observations: Mutex<Vec<Observation>>,
}

impl CollectingSink {
    pub fn count(&self) -> usize {
        self.observations.lock().unwrap().len()
    }
}

impl ObservationSink for CollectingSink {
    fn dispatch(&self, observation: &Observation) {
        self.observations.lock().unwrap().push(observation.clone());
    }
}

/// A collector with one configured server target named `main`.
pub fn make_collector() -> (
    Arc<CollectStatsUseCase>,
    Arc<CountingTransport>,
    Arc<CollectingSink>,
) {
    let transport = Arc::new(CountingTransport::new("udp-queries=3,"));
    let sink = Arc::new(CollectingSink::default());
    let submitter = MetricSubmitter::new(Arc::new(SingleTypeRegistry::dns_question()), sink.clone());
    let collector = Arc::new(CollectStatsUseCase::new(transport.clone(), submitter));

    let rejected = collector.configure(&[TargetDeclaration::new(Dialect::Server, "main")]);
    assert!(rejected.is_empty());

    (collector, transport, sink)
}
