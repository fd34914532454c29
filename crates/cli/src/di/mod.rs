use pdns_stats_application::ports::{ObservationSink, TypeRegistry};
use pdns_stats_application::services::MetricSubmitter;
use pdns_stats_application::use_cases::CollectStatsUseCase;
use pdns_stats_domain::config::OutputKind;
use pdns_stats_domain::Config;
use pdns_stats_infrastructure::sinks::{PutvalSink, TracingSink};
use pdns_stats_infrastructure::{TypesDb, UnixControlSocket};
use std::sync::Arc;
use tracing::info;

/// Builds the collector with the transport, type registry and sink selected
/// by the configuration.
pub fn build_collector(config: &Config) -> anyhow::Result<Arc<CollectStatsUseCase>> {
    let collector_config = &config.collector;

    let registry: Arc<dyn TypeRegistry> = match collector_config.types_db.as_deref() {
        Some(path) => Arc::new(TypesDb::from_file(path)?),
        None => Arc::new(TypesDb::builtin()),
    };

    let sink: Arc<dyn ObservationSink> = match collector_config.output {
        OutputKind::Putval => {
            let hostname = match &collector_config.hostname {
                Some(hostname) => hostname.clone(),
                None => hostname::get()?.to_string_lossy().into_owned(),
            };
            info!(hostname = %hostname, "Dispatching observations as PUTVAL lines");
            Arc::new(PutvalSink::new(
                std::io::stdout(),
                hostname,
                collector_config.interval_secs,
            ))
        }
        OutputKind::Log => Arc::new(TracingSink),
    };

    let transport = Arc::new(
        UnixControlSocket::new(&collector_config.local_socket)
            .with_timeout(collector_config.query_timeout()),
    );

    Ok(Arc::new(CollectStatsUseCase::new(
        transport,
        MetricSubmitter::new(registry, sink),
    )))
}
