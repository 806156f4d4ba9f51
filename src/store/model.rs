//! Domain records as persisted by the management application.
//!
//! Kind fields are stored as numeric codes. Codes this crate does not know
//! decode to an `Unknown(code)` variant so newer stores still load. A record
//! without a kind field gets `Unknown(0)`, the store's zero value.

use serde::{Deserialize, Serialize};

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(from = "i64", into = "i64")]
        pub enum $name {
            $($variant,)+
            Unknown(i64),
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                match code {
                    $($code => $name::$variant,)+
                    other => $name::Unknown(other),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> i64 {
                match value {
                    $($name::$variant => $code,)+
                    $name::Unknown(other) => other,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::Unknown(0)
            }
        }
    };
}

coded_enum! {
    /// How the management application reaches an environment.
    pub enum EndpointType {
        Docker = 1,
        AgentOnDocker = 2,
        Azure = 3,
        EdgeAgentOnDocker = 4,
        KubernetesLocal = 5,
        AgentOnKubernetes = 6,
        EdgeAgentOnKubernetes = 7,
    }
}

coded_enum! {
    pub enum RegistryType {
        Quay = 1,
        Azure = 2,
        Custom = 3,
        Gitlab = 4,
    }
}

coded_enum! {
    /// Kind of resource a resource control governs.
    pub enum ResourceControlType {
        Container = 1,
        Service = 2,
        Volume = 3,
        Network = 4,
        Secret = 5,
        Stack = 6,
        Config = 7,
    }
}

coded_enum! {
    pub enum StackType {
        DockerSwarm = 1,
        DockerCompose = 2,
        Kubernetes = 3,
    }
}

coded_enum! {
    pub enum AuthenticationMethod {
        Internal = 1,
        Ldap = 2,
        OAuth = 3,
    }
}

coded_enum! {
    pub enum MembershipRole {
        TeamLeader = 1,
        TeamMember = 2,
    }
}

coded_enum! {
    pub enum JobType {
        ScriptExecution = 1,
        Snapshot = 2,
        EndpointSync = 3,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfiguration {
    #[serde(rename = "TelemetryID")]
    pub telemetry_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DockerHub {
    pub authentication: bool,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Schedule {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    pub cron_expression: String,
    pub recurring: bool,
    pub job_type: JobType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Endpoint {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: EndpointType,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "GroupId")]
    pub group_id: u32,
    /// Most recent first.
    pub snapshots: Vec<DockerSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DockerSnapshot {
    pub time: i64,
    pub docker_version: String,
    pub swarm: bool,
    #[serde(rename = "TotalCPU")]
    pub total_cpu: u32,
    pub total_memory: u64,
    pub running_container_count: u64,
    pub stopped_container_count: u64,
    pub healthy_container_count: u64,
    pub unhealthy_container_count: u64,
    pub volume_count: u64,
    pub image_count: u64,
    pub service_count: u64,
    pub stack_count: u64,
    pub node_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EndpointGroup {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Registry {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: RegistryType,
    #[serde(rename = "URL")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResourceControl {
    #[serde(rename = "Id")]
    pub id: u32,
    #[serde(rename = "ResourceId")]
    pub resource_id: String,
    #[serde(rename = "Type")]
    pub kind: ResourceControlType,
    pub public: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Pair {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Settings {
    #[serde(rename = "LogoURL")]
    pub logo_url: String,
    pub black_listed_labels: Vec<Pair>,
    pub authentication_method: AuthenticationMethod,
    pub allow_bind_mounts_for_regular_users: bool,
    pub allow_privileged_mode_for_regular_users: bool,
    pub allow_volume_browser_for_regular_users: bool,
    pub enable_host_management_features: bool,
    /// Duration string such as "5m"; empty when never configured.
    pub snapshot_interval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Stack {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: StackType,
    #[serde(rename = "EndpointId")]
    pub endpoint_id: u32,
    pub entry_point: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    #[serde(rename = "ID")]
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Team {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TeamMembership {
    #[serde(rename = "Id")]
    pub id: u32,
    #[serde(rename = "UserID")]
    pub user_id: u32,
    #[serde(rename = "TeamID")]
    pub team_id: u32,
    pub role: MembershipRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_survive_decoding() {
        let registry: Registry = serde_json::from_str(r#"{"Id": 4, "Type": 42}"#).unwrap();
        assert_eq!(registry.kind, RegistryType::Unknown(42));

        let back = serde_json::to_value(&registry).unwrap();
        assert_eq!(back["Type"], 42);
    }

    #[test]
    fn codes_beyond_a_byte_decode_as_unknown() {
        let registry: Registry = serde_json::from_str(r#"{"Id": 1, "Type": 300}"#).unwrap();
        assert_eq!(registry.kind, RegistryType::Unknown(300));

        let stack: Stack = serde_json::from_str(r#"{"Type": -1}"#).unwrap();
        assert_eq!(stack.kind, StackType::Unknown(-1));
    }

    #[test]
    fn missing_kind_fields_decode_as_unknown_zero() {
        let rc: ResourceControl = serde_json::from_str(r#"{"Id": 1}"#).unwrap();
        assert_eq!(rc.kind, ResourceControlType::Unknown(0));

        let schedule: Schedule = serde_json::from_str(r#"{"Recurring": true}"#).unwrap();
        assert_eq!(schedule.job_type, JobType::Unknown(0));

        let endpoint: Endpoint = serde_json::from_str(r#"{"Id": 1}"#).unwrap();
        assert_eq!(endpoint.kind, EndpointType::Unknown(0));

        let membership: TeamMembership = serde_json::from_str(r#"{"UserID": 3}"#).unwrap();
        assert_eq!(membership.role, MembershipRole::Unknown(0));
    }

    #[test]
    fn known_codes_map_to_variants() {
        assert_eq!(EndpointType::from(4), EndpointType::EdgeAgentOnDocker);
        assert_eq!(ResourceControlType::from(7), ResourceControlType::Config);
        assert_eq!(StackType::from(2), StackType::DockerCompose);
        assert_eq!(i64::from(AuthenticationMethod::OAuth), 3);
    }

    #[test]
    fn settings_default_to_no_auth_method_and_nothing_allowed() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.authentication_method, AuthenticationMethod::Unknown(0));
        assert!(!settings.allow_bind_mounts_for_regular_users);
        assert!(settings.snapshot_interval.is_empty());
    }

    #[test]
    fn endpoint_decodes_snapshots_in_order() {
        let endpoint: Endpoint = serde_json::from_str(
            r#"{
                "Id": 1,
                "Type": 2,
                "Snapshots": [
                    {"DockerVersion": "24.0.7", "RunningContainerCount": 3},
                    {"DockerVersion": "20.10.1"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(endpoint.kind, EndpointType::AgentOnDocker);
        assert_eq!(endpoint.snapshots.len(), 2);
        assert_eq!(endpoint.snapshots[0].docker_version, "24.0.7");
        assert_eq!(endpoint.snapshots[0].running_container_count, 3);
    }
}
