use pdns_stats_application::use_cases::CollectStatsUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_INTERVAL_SECS: u64 = 10;

/// Drives one read tick per interval until cancelled, then releases the
/// collector's targets.
///
/// A tick is awaited before the next one starts, so ticks never overlap.
pub struct StatsReadJob {
    collector: Arc<CollectStatsUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl StatsReadJob {
    pub fn new(collector: Arc<CollectStatsUseCase>) -> Self {
        Self {
            collector,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        info!(interval_secs = self.interval_secs, "Starting stats read job");

        tokio::spawn(async move {
            if self.interval_secs == 0 {
                error!("StatsReadJob: interval must be positive, not starting");
                return;
            }

            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("StatsReadJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let summary = self.collector.read_tick().await;
                        if summary.targets > 0 && summary.failed == summary.targets {
                            error!(targets = summary.targets, "No control socket answered");
                        }
                    }
                }
            }

            self.collector.shutdown();
        })
    }
}
