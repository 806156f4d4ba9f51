//! Where finished reports go.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::telemetry::output::{self, OutputFormat};
use crate::telemetry::TelemetryData;
use crate::utils::TelemetryError;

/// Receives the outcome of every telemetry run.
pub trait ReportSink: Send + Sync {
    /// Called once per successful run with the complete report.
    fn report_ready(&self, report: TelemetryData);

    /// Called once per aborted run. No report exists for that run.
    fn report_failed(&self, error: &TelemetryError);
}

#[derive(Debug)]
pub enum RunOutcome {
    Ready(TelemetryData),
    Failed(String),
}

/// Forwards outcomes over a channel so the caller can await them.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<RunOutcome>,
}

impl ChannelSink {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<RunOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, outcome: RunOutcome) {
        if self.tx.send(outcome).is_err() {
            tracing::debug!("telemetry outcome receiver dropped");
        }
    }
}

impl ReportSink for ChannelSink {
    fn report_ready(&self, report: TelemetryData) {
        self.send(RunOutcome::Ready(report));
    }

    fn report_failed(&self, error: &TelemetryError) {
        self.send(RunOutcome::Failed(error.to_string()));
    }
}

/// Prints each report to stdout.
pub struct StdoutSink {
    format: OutputFormat,
}

impl StdoutSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl ReportSink for StdoutSink {
    fn report_ready(&self, report: TelemetryData) {
        if let Err(e) = output::display(&report, self.format) {
            tracing::warn!(error = %e, "unable to print telemetry report");
        }
    }

    fn report_failed(&self, _error: &TelemetryError) {}
}

/// Writes each report as `telemetry-<UTC timestamp>.json` under `dir`.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn write(&self, report: &TelemetryData) -> Result<PathBuf, TelemetryError> {
        std::fs::create_dir_all(&self.dir)?;
        let name = format!(
            "telemetry-{}.json",
            chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ")
        );
        let path = self.dir.join(name);
        std::fs::write(&path, output::render(report, OutputFormat::Json)?)?;
        Ok(path)
    }
}

impl ReportSink for DirectorySink {
    fn report_ready(&self, report: TelemetryData) {
        match self.write(&report) {
            Ok(path) => tracing::info!(path = %path.display(), "telemetry report written"),
            Err(e) => tracing::warn!(error = %e, dir = %self.dir.display(), "unable to write telemetry report"),
        }
    }

    fn report_failed(&self, _error: &TelemetryError) {}
}

/// Delivers every outcome to each sink in order.
pub struct FanoutSink {
    sinks: Vec<Arc<dyn ReportSink>>,
}

impl FanoutSink {
    pub fn new(sinks: Vec<Arc<dyn ReportSink>>) -> Self {
        Self { sinks }
    }
}

impl ReportSink for FanoutSink {
    fn report_ready(&self, report: TelemetryData) {
        for sink in &self.sinks {
            sink.report_ready(report.clone());
        }
    }

    fn report_failed(&self, error: &TelemetryError) {
        for sink in &self.sinks {
            sink.report_failed(error);
        }
    }
}
