//! appwatch monitor daemon binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use monitor::config::Config;
use monitor::notifier::{LogNotifier, WebhookNotifier};
use probe::{Notifier, Supervisor};
use tracing::info;

/// Web application uptime and latency monitor.
#[derive(Debug, Parser)]
#[command(name = "appwatch", version, about)]
struct Args {
    /// Path of the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append logs to this file in addition to stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,

    /// Default log level when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Fail fast on a broken configuration, before any task starts.
    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let level = args
        .log_level
        .or_else(|| config.logging.level.clone())
        .unwrap_or_else(|| "info".to_string());
    let json = args.json || config.logging.format.as_deref() == Some("json");
    common::logging::init_with_options(&level, json, args.log_file.as_deref())?;

    info!(endpoints = config.endpoints.len(), "appwatch starting");

    let notifier: Arc<dyn Notifier> = match &config.webhook_url {
        Some(url) => Arc::new(WebhookNotifier::new(url.as_str())?),
        None => Arc::new(LogNotifier),
    };

    let supervisor = Arc::new(Supervisor::new(config.to_probe_config(), notifier)?);

    let sup = supervisor.clone();
    let mut run = tokio::spawn(async move { sup.start().await });

    tokio::select! {
        res = &mut run => res??,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupt received, draining in-flight cycle");
            supervisor.stop();
            run.await??;
        }
    }

    Ok(())
}
