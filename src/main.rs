mod cli;
mod config;
mod store;
mod telemetry;
mod utils;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::sync::Notify;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use config::Config;
use store::MemoryStore;
use telemetry::output::{self, OutputFormat};
use telemetry::sink::{ChannelSink, DirectorySink, FanoutSink, RunOutcome, StdoutSink};
use telemetry::{ReportSink, TelemetryJobRunner};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portainer_telemetry=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Collect { store, output } => {
            run_collect(store, &output).await
        }
        Commands::Schedule { store, interval, output, output_dir } => {
            run_schedule(store, interval, &output, output_dir).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_collect(store_path: Option<std::path::PathBuf>, format: &str) -> anyhow::Result<()> {
    let format: OutputFormat = format.parse()?;
    let config = Config::from_env().with_overrides(store_path, None);

    eprintln!("Loading store from {}...", config.store_path.display());
    let store = load_store(&config)?;

    eprintln!("Computing telemetry...");
    let (sink, mut outcomes) = ChannelSink::channel();
    let runner = TelemetryJobRunner::new(Arc::new(store), Arc::new(sink), config.app_version);
    runner.run().await?;

    match outcomes.recv().await {
        Some(RunOutcome::Ready(report)) => output::display(&report, format)?,
        Some(RunOutcome::Failed(e)) => anyhow::bail!(e),
        None => anyhow::bail!("telemetry run ended without an outcome"),
    }

    Ok(())
}

async fn run_schedule(
    store_path: Option<std::path::PathBuf>,
    interval: Option<u64>,
    format: &str,
    output_dir: Option<std::path::PathBuf>,
) -> anyhow::Result<()> {
    let format: OutputFormat = format.parse()?;
    let interval_seconds = config::schedule_interval(interval)?;
    let config = Config::from_env().with_overrides(store_path, output_dir);
    let store = load_store(&config)?;

    let mut sinks: Vec<Arc<dyn ReportSink>> = vec![Arc::new(StdoutSink::new(format))];
    if let Some(dir) = &config.output_dir {
        sinks.push(Arc::new(DirectorySink::new(dir)));
    }
    let runner = TelemetryJobRunner::new(
        Arc::new(store),
        Arc::new(FanoutSink::new(sinks)),
        config.app_version.clone(),
    );

    // 设置 Ctrl+C 处理
    let shutdown = Arc::new(Notify::new());
    let s = shutdown.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nCtrl+C received, exiting...");
        s.notify_one();
    })
    .context("unable to install Ctrl+C handler")?;

    tracing::info!(
        store = %config.store_path.display(),
        interval_seconds,
        "telemetry schedule started"
    );
    let schedule = telemetry::spawn_schedule(runner, Duration::from_secs(interval_seconds));

    shutdown.notified().await;
    schedule.abort();
    Ok(())
}

fn load_store(config: &Config) -> anyhow::Result<MemoryStore> {
    MemoryStore::from_path(&config.store_path)
        .with_context(|| format!("unable to load store {}", config.store_path.display()))
}
