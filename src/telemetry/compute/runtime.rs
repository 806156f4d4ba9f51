//! Runtime section, read from the running process rather than the store.

use crate::telemetry::report::{RuntimeTelemetry, TelemetryData};

pub fn compute(data: &mut TelemetryData, version: &str) {
    data.runtime = RuntimeTelemetry {
        portainer_version: version.to_string(),
        platform: platform(std::env::consts::OS).to_string(),
        arch: arch(std::env::consts::ARCH).to_string(),
    };
}

/// Platform names as the collector has always received them.
fn platform(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

fn arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        "powerpc64" if cfg!(target_endian = "little") => "ppc64le",
        "powerpc64" => "ppc64",
        other => other,
    }
}
