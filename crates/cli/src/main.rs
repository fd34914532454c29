use clap::Parser;
use pdns_stats_application::use_cases::CollectStatsUseCase;
use pdns_stats_domain::{CliOverrides, Config};
use pdns_stats_jobs::{JobRunner, StatsReadJob};
use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "pdns-stats")]
#[command(version)]
#[command(about = "Polls PowerDNS control sockets and reports their statistics")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Seconds between two reads
    #[arg(short = 'i', long)]
    interval: Option<u64>,

    /// Local socket path bound for recursor queries
    #[arg(long, value_name = "PATH")]
    local_socket: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Read every target once and exit
    #[arg(long)]
    once: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            interval_secs: self.interval,
            local_socket: self.local_socket.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(Config::get_config_path);
    let config = bootstrap::load_config(config_path.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting pdns-stats v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => info!(path = %path, "Configuration loaded"),
        None => warn!("No configuration file found, no targets to poll"),
    }

    let collector = di::build_collector(&config)?;
    collector.configure(&config.targets);

    if cli.once {
        let summary = collector.read_tick().await;
        info!(
            observations = summary.observations,
            failed = summary.failed,
            "Single read completed"
        );
        collector.shutdown();
        return Ok(());
    }

    let shutdown = CancellationToken::new();
    let handles = JobRunner::new()
        .with_stats_read(
            StatsReadJob::new(collector.clone()).with_interval(config.collector.interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received SIGINT");
                break;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM");
                break;
            }
            _ = sighup.recv() => {
                reload_targets(&cli, config_path.as_deref(), &collector);
            }
        }
    }

    shutdown.cancel();
    for handle in handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Background job ended abnormally");
        }
    }

    info!("Shutdown complete");
    Ok(())
}

/// Re-reads the configuration file and swaps in its target list. Global
/// collector options only take effect after a restart.
fn reload_targets(cli: &Cli, path: Option<&str>, collector: &Arc<CollectStatsUseCase>) {
    let Some(path) = path else {
        warn!("Received SIGHUP but no configuration file is in use");
        return;
    };

    match bootstrap::load_config(Some(path), cli.overrides()) {
        Ok(config) => {
            let rejected = collector.configure(&config.targets);
            info!(
                path,
                rejected = rejected.len(),
                "Configuration reloaded"
            );
        }
        Err(e) => {
            error!(path, error = %e, "Configuration reload failed, keeping current targets");
        }
    }
}
