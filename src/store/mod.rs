//! Read-only accessors over the management application's data store.

pub mod memory;
pub mod model;

use crate::utils::StoreError;
use model::*;

pub use memory::MemoryStore;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Per-entity reads used by the telemetry job.
///
/// Collections are returned in store order. Singletons (telemetry, DockerHub,
/// settings) fail with [`StoreError::NotFound`] when absent.
pub trait DataStore: Send + Sync {
    fn telemetry(&self) -> StoreResult<TelemetryConfiguration>;
    fn dockerhub(&self) -> StoreResult<DockerHub>;
    fn schedules(&self) -> StoreResult<Vec<Schedule>>;
    fn endpoints(&self) -> StoreResult<Vec<Endpoint>>;
    fn endpoint_groups(&self) -> StoreResult<Vec<EndpointGroup>>;
    fn registries(&self) -> StoreResult<Vec<Registry>>;
    fn resource_controls(&self) -> StoreResult<Vec<ResourceControl>>;
    fn settings(&self) -> StoreResult<Settings>;
    fn stacks(&self) -> StoreResult<Vec<Stack>>;
    fn tags(&self) -> StoreResult<Vec<Tag>>;
    fn teams(&self) -> StoreResult<Vec<Team>>;
    fn team_memberships(&self) -> StoreResult<Vec<TeamMembership>>;
}
