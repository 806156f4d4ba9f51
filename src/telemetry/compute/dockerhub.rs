use crate::store::{DataStore, StoreResult};
use crate::telemetry::report::{DockerHubTelemetry, TelemetryData};

pub fn compute(data: &mut TelemetryData, store: &dyn DataStore) -> StoreResult<()> {
    let dockerhub = store.dockerhub()?;

    data.dockerhub = DockerHubTelemetry {
        authentication: dockerhub.authentication,
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::model::DockerHub;
    use crate::store::MemoryStore;

    #[test]
    fn reports_configured_authentication() {
        let mut store = MemoryStore::with_identifier("id");
        store.dockerhub = Some(DockerHub {
            authentication: true,
            username: "hub-user".to_string(),
        });

        let mut data = TelemetryData::default();
        compute(&mut data, &store).unwrap();
        assert!(data.dockerhub.authentication);
    }

    #[test]
    fn missing_configuration_leaves_section_untouched() {
        let mut store = MemoryStore::with_identifier("id");
        store.dockerhub = None;

        let mut data = TelemetryData::default();
        data.dockerhub.authentication = true;
        assert!(compute(&mut data, &store).is_err());
        assert!(data.dockerhub.authentication);
    }
}
