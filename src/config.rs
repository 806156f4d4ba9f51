use std::path::PathBuf;

use crate::utils::{Result, TelemetryError};

pub const DEFAULT_INTERVAL_SECONDS: u64 = 24 * 60 * 60;
pub const MIN_INTERVAL_SECONDS: u64 = 10;

/// Settings shared by every subcommand. The schedule interval is resolved
/// separately by [`schedule_interval`] since only `schedule` uses it.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub store_path: PathBuf,
    pub app_version: String,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| non_empty(&var, key);

        let store_path = get("TELEMETRY_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data/store.json"));

        let app_version = get("TELEMETRY_APP_VERSION")
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

        let output_dir = get("TELEMETRY_OUTPUT_DIR").map(PathBuf::from);

        Self {
            store_path,
            app_version,
            output_dir,
        }
    }

    /// Applies command-line values over the environment.
    pub fn with_overrides(mut self, store_path: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        if let Some(path) = store_path {
            self.store_path = path;
        }
        if output_dir.is_some() {
            self.output_dir = output_dir;
        }
        self
    }
}

/// Seconds between scheduled runs: the command-line value if given, else
/// `TELEMETRY_INTERVAL_SECONDS`, else one day. Must be at least
/// [`MIN_INTERVAL_SECONDS`].
pub fn schedule_interval(cli: Option<u64>) -> Result<u64> {
    schedule_interval_from(cli, |key| std::env::var(key).ok())
}

fn schedule_interval_from(cli: Option<u64>, var: impl Fn(&str) -> Option<String>) -> Result<u64> {
    let seconds = match cli {
        Some(seconds) => seconds,
        None => match non_empty(&var, "TELEMETRY_INTERVAL_SECONDS") {
            Some(v) => v.trim().parse::<u64>().map_err(|_| {
                TelemetryError::Config(format!(
                    "TELEMETRY_INTERVAL_SECONDS must be a number of seconds, got {:?}",
                    v
                ))
            })?,
            None => DEFAULT_INTERVAL_SECONDS,
        },
    };

    if seconds < MIN_INTERVAL_SECONDS {
        return Err(TelemetryError::Config(format!(
            "interval must be >= {} seconds, got {}",
            MIN_INTERVAL_SECONDS, seconds
        )));
    }
    Ok(seconds)
}

fn non_empty(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    var(key).filter(|v| !v.trim().is_empty())
}
