//! Store wrapper that counts reads and can fail one accessor on demand.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::store::model::*;
use crate::store::{DataStore, MemoryStore, StoreResult};
use crate::utils::StoreError;

pub struct SpyStore {
    inner: MemoryStore,
    failing: Option<&'static str>,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl SpyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            failing: None,
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Makes the accessor named `entity` fail with a read error.
    pub fn failing(mut self, entity: &'static str) -> Self {
        self.failing = Some(entity);
        self
    }

    pub fn calls(&self, entity: &str) -> usize {
        self.calls.lock().unwrap().get(entity).copied().unwrap_or(0)
    }

    fn record<T>(&self, entity: &'static str, read: impl FnOnce() -> StoreResult<T>) -> StoreResult<T> {
        *self.calls.lock().unwrap().entry(entity).or_insert(0) += 1;
        if self.failing == Some(entity) {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("{entity} bucket unreadable"),
            )));
        }
        read()
    }
}

impl DataStore for SpyStore {
    fn telemetry(&self) -> StoreResult<TelemetryConfiguration> {
        self.record("telemetry", || self.inner.telemetry())
    }

    fn dockerhub(&self) -> StoreResult<DockerHub> {
        self.record("dockerhub", || self.inner.dockerhub())
    }

    fn schedules(&self) -> StoreResult<Vec<Schedule>> {
        self.record("schedules", || self.inner.schedules())
    }

    fn endpoints(&self) -> StoreResult<Vec<Endpoint>> {
        self.record("endpoints", || self.inner.endpoints())
    }

    fn endpoint_groups(&self) -> StoreResult<Vec<EndpointGroup>> {
        self.record("endpoint_groups", || self.inner.endpoint_groups())
    }

    fn registries(&self) -> StoreResult<Vec<Registry>> {
        self.record("registries", || self.inner.registries())
    }

    fn resource_controls(&self) -> StoreResult<Vec<ResourceControl>> {
        self.record("resource_controls", || self.inner.resource_controls())
    }

    fn settings(&self) -> StoreResult<Settings> {
        self.record("settings", || self.inner.settings())
    }

    fn stacks(&self) -> StoreResult<Vec<Stack>> {
        self.record("stacks", || self.inner.stacks())
    }

    fn tags(&self) -> StoreResult<Vec<Tag>> {
        self.record("tags", || self.inner.tags())
    }

    fn teams(&self) -> StoreResult<Vec<Team>> {
        self.record("teams", || self.inner.teams())
    }

    fn team_memberships(&self) -> StoreResult<Vec<TeamMembership>> {
        self.record("team_memberships", || self.inner.team_memberships())
    }
}
