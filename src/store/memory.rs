//! Store held entirely in memory, optionally loaded from a JSON export.

use std::path::Path;

use serde::Deserialize;

use crate::store::model::*;
use crate::store::{DataStore, StoreResult};
use crate::utils::StoreError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MemoryStore {
    pub telemetry: Option<TelemetryConfiguration>,
    #[serde(rename = "DockerHub")]
    pub dockerhub: Option<DockerHub>,
    pub schedules: Vec<Schedule>,
    pub endpoints: Vec<Endpoint>,
    pub endpoint_groups: Vec<EndpointGroup>,
    pub registries: Vec<Registry>,
    pub resource_controls: Vec<ResourceControl>,
    pub settings: Option<Settings>,
    pub stacks: Vec<Stack>,
    pub tags: Vec<Tag>,
    pub teams: Vec<Team>,
    pub team_memberships: Vec<TeamMembership>,
}

impl MemoryStore {
    /// Store with the singleton records present and every collection empty.
    #[cfg(test)]
    pub fn with_identifier(telemetry_id: impl Into<String>) -> Self {
        Self {
            telemetry: Some(TelemetryConfiguration {
                telemetry_id: telemetry_id.into(),
            }),
            dockerhub: Some(DockerHub::default()),
            settings: Some(Settings::default()),
            ..Self::default()
        }
    }

    pub fn from_path(path: &Path) -> StoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl DataStore for MemoryStore {
    fn telemetry(&self) -> StoreResult<TelemetryConfiguration> {
        self.telemetry
            .clone()
            .ok_or(StoreError::NotFound("telemetry configuration"))
    }

    fn dockerhub(&self) -> StoreResult<DockerHub> {
        self.dockerhub
            .clone()
            .ok_or(StoreError::NotFound("dockerhub configuration"))
    }

    fn schedules(&self) -> StoreResult<Vec<Schedule>> {
        Ok(self.schedules.clone())
    }

    fn endpoints(&self) -> StoreResult<Vec<Endpoint>> {
        Ok(self.endpoints.clone())
    }

    fn endpoint_groups(&self) -> StoreResult<Vec<EndpointGroup>> {
        Ok(self.endpoint_groups.clone())
    }

    fn registries(&self) -> StoreResult<Vec<Registry>> {
        Ok(self.registries.clone())
    }

    fn resource_controls(&self) -> StoreResult<Vec<ResourceControl>> {
        Ok(self.resource_controls.clone())
    }

    fn settings(&self) -> StoreResult<Settings> {
        self.settings.clone().ok_or(StoreError::NotFound("settings"))
    }

    fn stacks(&self) -> StoreResult<Vec<Stack>> {
        Ok(self.stacks.clone())
    }

    fn tags(&self) -> StoreResult<Vec<Tag>> {
        Ok(self.tags.clone())
    }

    fn teams(&self) -> StoreResult<Vec<Team>> {
        Ok(self.teams.clone())
    }

    fn team_memberships(&self) -> StoreResult<Vec<TeamMembership>> {
        Ok(self.team_memberships.clone())
    }
}
