//! 输出层：接收 TelemetryData，渲染 text 或 json

use std::fmt::Write as _;
use std::str::FromStr;

use crate::telemetry::report::TelemetryData;
use crate::utils::{Result, TelemetryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TelemetryError::Output(format!("unknown format: {}", other))),
        }
    }
}

pub fn display(report: &TelemetryData, format: OutputFormat) -> Result<()> {
    println!("{}", render(report, format)?);
    Ok(())
}

pub fn render(report: &TelemetryData, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

// ── JSON ────────────────────────────────────────────────────────────────────

fn render_json(report: &TelemetryData) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| TelemetryError::Output(format!("JSON serialize: {}", e)))
}

// ── Text ────────────────────────────────────────────────────────────────────

fn render_text(report: &TelemetryData) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_text(&mut out, report);
    out
}

fn write_text(out: &mut String, r: &TelemetryData) -> std::fmt::Result {
    section(out, "TELEMETRY")?;
    writeln!(out, "  Identifier   : {}", r.identifier)?;

    // ── Runtime ───────────────────────────────────────────────────────────
    section(out, "RUNTIME")?;
    writeln!(out, "  Version      : {}", r.runtime.portainer_version)?;
    writeln!(out, "  Platform     : {}/{}", r.runtime.platform, r.runtime.arch)?;

    // ── Settings ──────────────────────────────────────────────────────────
    section(out, "SETTINGS")?;
    let s = &r.settings;
    writeln!(out, "  Auth mode    : {}", s.authentication_mode)?;
    writeln!(out, "  Custom logo  : {}", yes_no(s.use_logo_url))?;
    writeln!(out, "  Label filter : {}", yes_no(s.use_black_listed_labels))?;
    writeln!(out, "  Host mgmt    : {}", yes_no(s.host_management))?;
    writeln!(out, "  Snapshot     : every {}s", s.snapshot_interval)?;
    writeln!(
        out,
        "  Restrictions : bind mounts={}  privileged={}  volume browser={}",
        yes_no(s.docker.restrict_bind_mounts),
        yes_no(s.docker.restrict_privileged_mode),
        yes_no(s.docker.restrict_volume_browser)
    )?;
    writeln!(out, "  DockerHub    : {}", if r.dockerhub.authentication { "authenticated" } else { "anonymous" })?;

    // ── Endpoints ─────────────────────────────────────────────────────────
    section(out, &format!("ENDPOINTS ({})", r.endpoint.count))?;
    writeln!(out, "  Groups       : {}", r.endpoint_group.count)?;
    for (i, e) in r.endpoint.endpoints.iter().enumerate() {
        let env = if e.environment.is_empty() { "(other)" } else { e.environment.as_str() };
        let mode = match (e.agent, e.edge) {
            (true, true) => "edge agent",
            (true, false) => "agent",
            _ => "direct",
        };
        writeln!(out, "  [{}/{}] {} ({})", i + 1, r.endpoint.count, env, mode)?;
        if !e.environment.is_empty() {
            let d = &e.docker;
            writeln!(
                out,
                "      Docker {}{}  containers={} images={} volumes={} services={} stacks={} nodes={}",
                if d.version.is_empty() { "(no snapshot)" } else { d.version.as_str() },
                if d.swarm { " swarm" } else { "" },
                d.containers, d.images, d.volumes, d.services, d.stacks, d.nodes
            )?;
        }
    }

    // ── Edge compute ──────────────────────────────────────────────────────
    section(out, "EDGE COMPUTE")?;
    writeln!(
        out,
        "  Schedules    : {} total  {} recurring scripts",
        r.edge_compute.schedule.count, r.edge_compute.schedule.recurring
    )?;

    // ── Registries ────────────────────────────────────────────────────────
    section(out, &format!("REGISTRIES ({})", r.registry.count))?;
    for reg in &r.registry.registries {
        writeln!(out, "  - {}", reg.kind)?;
    }

    // ── Access control ────────────────────────────────────────────────────
    section(out, &format!("RESOURCE CONTROLS ({})", r.resource_control.count))?;
    let rc = &r.resource_control;
    writeln!(
        out,
        "  containers={} services={} volumes={} networks={} secrets={} configs={} stacks={}",
        rc.containers, rc.services, rc.volumes, rc.networks, rc.secrets, rc.configs, rc.stacks
    )?;
    if rc.classified() < rc.count {
        writeln!(out, "  unclassified={}", rc.count - rc.classified())?;
    }

    // ── Stacks / tags / teams ─────────────────────────────────────────────
    section(out, "STACKS / TAGS / TEAMS")?;
    writeln!(
        out,
        "  Stacks       : {} total  {} standalone  {} swarm",
        r.stack.count, r.stack.standalone, r.stack.swarm
    )?;
    writeln!(out, "  Tags         : {}", r.tag.count)?;
    writeln!(
        out,
        "  Teams        : {}  ({} leaders)",
        r.team.count, r.team.team_leader_count
    )?;

    Ok(())
}

// ── 格式化工具 ───────────────────────────────────────────────────────────────

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "\n{}", "─".repeat(60))?;
    writeln!(out, "  {}", title)?;
    writeln!(out, "{}", "─".repeat(60))
}

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}
