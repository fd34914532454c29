use crate::ports::StatTransport;
use crate::services::{stat_parser, MetricSubmitter, SubmitOutcome, TargetRegistry};
use arc_swap::ArcSwap;
use pdns_stats_domain::{ConfigError, TargetDeclaration};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Counters for one read tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    pub targets: usize,
    pub failed: usize,
    pub observations: usize,
    pub unknown: usize,
    pub rejected: usize,
}

/// Polls every configured target and forwards its statistics to the sink.
///
/// The target list is published through an [`ArcSwap`], so a new
/// configuration replaces the old one in a single store and a tick that is
/// already running keeps the snapshot it started with.
pub struct CollectStatsUseCase {
    registry: ArcSwap<TargetRegistry>,
    transport: Arc<dyn StatTransport>,
    submitter: MetricSubmitter,
}

impl CollectStatsUseCase {
    pub fn new(transport: Arc<dyn StatTransport>, submitter: MetricSubmitter) -> Self {
        Self {
            registry: ArcSwap::from_pointee(TargetRegistry::new()),
            transport,
            submitter,
        }
    }

    /// Builds a registry from the declarations and publishes it.
    ///
    /// Invalid declarations are logged, skipped and returned; the remaining
    /// ones are still registered.
    pub fn configure(&self, declarations: &[TargetDeclaration]) -> Vec<ConfigError> {
        let mut registry = TargetRegistry::new();
        let mut rejected = Vec::new();

        for declaration in declarations {
            let result = declaration
                .to_target()
                .and_then(|target| registry.add(target));

            if let Err(e) = result {
                warn!(error = %e, "Ignoring target declaration");
                rejected.push(e);
            }
        }

        for target in registry.iter() {
            debug!(
                instance = target.instance(),
                dialect = %target.dialect(),
                socket = %target.socket_path().display(),
                "Add target"
            );
        }

        info!(
            targets = registry.len(),
            rejected = rejected.len(),
            "Targets configured"
        );

        self.registry.store(Arc::new(registry));
        rejected
    }

    /// Queries all targets in registration order.
    ///
    /// Never fails: a target whose exchange fails contributes nothing this
    /// tick and the remaining targets are still queried.
    pub async fn read_tick(&self) -> TickSummary {
        let registry = self.registry.load_full();
        let mut summary = TickSummary::default();

        for target in registry.iter() {
            summary.targets += 1;

            let buffer = match self.transport.query(target).await {
                Ok(buffer) => buffer,
                Err(e) => {
                    error!(
                        instance = target.instance(),
                        step = %e.step,
                        error = %e,
                        "Control socket query failed"
                    );
                    summary.failed += 1;
                    continue;
                }
            };

            for (name, value) in stat_parser::parse(target.dialect(), &buffer, target.command()) {
                match self.submitter.submit(target.instance(), name, value) {
                    SubmitOutcome::Dispatched => summary.observations += 1,
                    SubmitOutcome::Unknown => summary.unknown += 1,
                    SubmitOutcome::Rejected => summary.rejected += 1,
                }
            }
        }

        debug!(
            targets = summary.targets,
            failed = summary.failed,
            observations = summary.observations,
            unknown = summary.unknown,
            rejected = summary.rejected,
            "Read tick completed"
        );

        summary
    }

    /// Releases all targets. Safe to call repeatedly and before `configure`.
    pub fn shutdown(&self) {
        let previous = self.registry.swap(Arc::new(TargetRegistry::new()));
        if !previous.is_empty() {
            info!(targets = previous.len(), "Targets released");
        }
    }

    /// Current registry snapshot.
    pub fn registry(&self) -> Arc<TargetRegistry> {
        self.registry.load_full()
    }
}
