//! Telemetry job: aggregates anonymous usage statistics from the store into
//! a [`TelemetryData`] report and hands it to a [`ReportSink`].

pub mod compute;
pub mod output;
pub mod report;
pub mod sink;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::store::{DataStore, StoreResult};
use crate::utils::{Result, TelemetryError};
use compute::*;
pub use report::TelemetryData;
pub use sink::ReportSink;

/// Runs the telemetry job against one store and delivers each outcome to
/// the sink.
///
/// Runs never overlap: a run triggered while another is in flight waits
/// for it before reading the store.
#[derive(Clone)]
pub struct TelemetryJobRunner {
    store: Arc<dyn DataStore>,
    sink: Arc<dyn ReportSink>,
    version: String,
    run_lock: Arc<Mutex<()>>,
}

impl TelemetryJobRunner {
    pub fn new(
        store: Arc<dyn DataStore>,
        sink: Arc<dyn ReportSink>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            store,
            sink,
            version: version.into(),
            run_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Triggers one run in the background and returns immediately.
    ///
    /// The outcome only reaches the sink; the handle lets callers wait for
    /// the run to finish.
    pub fn run(&self) -> JoinHandle<()> {
        let runner = self.clone();
        tokio::spawn(async move { runner.run_once().await })
    }

    async fn run_once(&self) {
        let _run_guard = self.run_lock.lock().await;
        tracing::info!("telemetry run started");

        match compute_report(self.store.as_ref(), &self.version) {
            Ok(report) => {
                tracing::info!(
                    identifier = %report.identifier,
                    endpoints = report.endpoint.count,
                    "telemetry report ready"
                );
                self.sink.report_ready(report);
            }
            Err(e) => {
                match &e {
                    TelemetryError::Step { category, source } => {
                        tracing::error!(category = *category, error = %source, "telemetry run aborted");
                    }
                    other => tracing::error!(error = %other, "telemetry run aborted"),
                }
                self.sink.report_failed(&e);
            }
        }
    }
}

/// Triggers a run every `interval`, the first one immediately.
pub fn spawn_schedule(runner: TelemetryJobRunner, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            // a panicked run is logged, the schedule keeps going
            if let Err(e) = runner.run().await {
                tracing::warn!(error = %e, "telemetry run task failed");
            }
        }
    })
}

/// Builds a complete report, stopping at the first section that cannot be
/// computed.
pub fn compute_report(store: &dyn DataStore, version: &str) -> Result<TelemetryData> {
    let telemetry = store
        .telemetry()
        .map_err(TelemetryError::step("identifier"))?;
    let mut data = TelemetryData::new(telemetry.telemetry_id);

    step("dockerhub", dockerhub::compute(&mut data, store))?;
    step("edge compute", edge_compute::compute(&mut data, store))?;
    step("endpoint", endpoint::compute(&mut data, store))?;
    step("endpoint group", endpoint_group::compute(&mut data, store))?;
    step("registry", registry::compute(&mut data, store))?;
    step("resource control", resource_control::compute(&mut data, store))?;
    runtime::compute(&mut data, version);
    step("settings", settings::compute(&mut data, store))?;
    step("stack", stack::compute(&mut data, store))?;
    step("tag", tag::compute(&mut data, store))?;
    step("team", team::compute(&mut data, store))?;

    Ok(data)
}

fn step(category: &'static str, result: StoreResult<()>) -> Result<()> {
    result.map_err(TelemetryError::step(category))?;
    tracing::debug!(category, "telemetry section computed");
    Ok(())
}
