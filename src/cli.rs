use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "portainer-telemetry")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIME"), ")"))]
#[command(about = "Anonymous usage telemetry aggregation job", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the telemetry job once and print the report
    Collect {
        /// Store export to read (JSON) [env: TELEMETRY_STORE_PATH]
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Run the telemetry job on a fixed interval until Ctrl+C
    Schedule {
        /// Store export to read (JSON) [env: TELEMETRY_STORE_PATH]
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// Seconds between runs [env: TELEMETRY_INTERVAL_SECONDS]
        #[arg(short, long)]
        interval: Option<u64>,

        /// Output format (text or json)
        #[arg(short, long, default_value = "json")]
        output: String,

        /// Also write every report into this directory [env: TELEMETRY_OUTPUT_DIR]
        #[arg(short = 'd', long)]
        output_dir: Option<PathBuf>,
    },
}
