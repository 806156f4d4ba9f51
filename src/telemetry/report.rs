//! Telemetry report model.
//!
//! Serialized field names are consumed by the telemetry collector and must
//! not change. Note the resource control configs bucket is named `Config`.

use serde::{Deserialize, Serialize};

pub const AUTHENTICATION_METHOD_INTERNAL: &str = "internal";
pub const AUTHENTICATION_METHOD_LDAP: &str = "ldap";
pub const AUTHENTICATION_METHOD_OAUTH: &str = "oauth";

pub const ENDPOINT_ENVIRONMENT_DOCKER: &str = "docker";

pub const REGISTRY_TYPE_CUSTOM: &str = "custom";
pub const REGISTRY_TYPE_QUAY: &str = "quay";
pub const REGISTRY_TYPE_AZURE: &str = "azure";
pub const REGISTRY_TYPE_GITLAB: &str = "gitlab";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TelemetryData {
    pub identifier: String,
    #[serde(rename = "DockerHub")]
    pub dockerhub: DockerHubTelemetry,
    pub edge_compute: EdgeComputeTelemetry,
    pub endpoint: EndpointTelemetry,
    pub endpoint_group: EndpointGroupTelemetry,
    pub registry: RegistryTelemetry,
    pub resource_control: ResourceControlTelemetry,
    pub runtime: RuntimeTelemetry,
    pub settings: SettingsTelemetry,
    pub stack: StackTelemetry,
    pub tag: TagTelemetry,
    pub team: TeamTelemetry,
}

impl TelemetryData {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DockerHubTelemetry {
    pub authentication: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EdgeComputeTelemetry {
    pub schedule: EdgeComputeScheduleTelemetry,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EdgeComputeScheduleTelemetry {
    pub count: usize,
    pub recurring: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointTelemetry {
    pub count: usize,
    pub endpoints: Vec<EndpointEnvironmentTelemetry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointEnvironmentTelemetry {
    /// Empty for environments outside the docker family.
    pub environment: String,
    pub agent: bool,
    pub edge: bool,
    pub docker: EndpointDockerTelemetry,
    pub kubernetes: EndpointKubernetesTelemetry,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointDockerTelemetry {
    pub version: String,
    pub swarm: bool,
    pub containers: u64,
    pub images: u64,
    pub volumes: u64,
    pub services: u64,
    pub stacks: u64,
    pub nodes: u64,
}

// TODO: fill from kubernetes snapshots once endpoints record them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointKubernetesTelemetry {
    pub version: String,
    pub nodes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointGroupTelemetry {
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistryTelemetry {
    pub count: usize,
    pub registries: Vec<RegistryConfigurationTelemetry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistryConfigurationTelemetry {
    #[serde(rename = "Type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceControlTelemetry {
    pub count: usize,
    pub containers: usize,
    pub services: usize,
    pub volumes: usize,
    pub networks: usize,
    pub secrets: usize,
    #[serde(rename = "Config")]
    pub configs: usize,
    pub stacks: usize,
}

impl ResourceControlTelemetry {
    /// Sum of the per-kind buckets; at most `count`.
    pub fn classified(&self) -> usize {
        self.containers
            + self.services
            + self.volumes
            + self.networks
            + self.secrets
            + self.configs
            + self.stacks
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuntimeTelemetry {
    pub portainer_version: String,
    pub platform: String,
    pub arch: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettingsTelemetry {
    pub authentication_mode: String,
    #[serde(rename = "UseLogoURL")]
    pub use_logo_url: bool,
    pub use_black_listed_labels: bool,
    pub docker: SettingsDockerTelemetry,
    pub host_management: bool,
    /// Seconds.
    pub snapshot_interval: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettingsDockerTelemetry {
    pub restrict_bind_mounts: bool,
    pub restrict_privileged_mode: bool,
    pub restrict_volume_browser: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackTelemetry {
    pub count: usize,
    pub standalone: usize,
    pub swarm: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagTelemetry {
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamTelemetry {
    pub count: usize,
    pub team_leader_count: usize,
}
