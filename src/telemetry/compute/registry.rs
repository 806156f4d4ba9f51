use crate::store::model::RegistryType;
use crate::store::{DataStore, StoreResult};
use crate::telemetry::report::{
    RegistryConfigurationTelemetry, RegistryTelemetry, TelemetryData, REGISTRY_TYPE_AZURE,
    REGISTRY_TYPE_CUSTOM, REGISTRY_TYPE_GITLAB, REGISTRY_TYPE_QUAY,
};

pub fn compute(data: &mut TelemetryData, store: &dyn DataStore) -> StoreResult<()> {
    let registries = store.registries()?;

    data.registry = RegistryTelemetry {
        count: registries.len(),
        registries: registries
            .iter()
            .map(|r| RegistryConfigurationTelemetry {
                kind: registry_type(r.kind).to_string(),
            })
            .collect(),
    };

    Ok(())
}

fn registry_type(kind: RegistryType) -> &'static str {
    match kind {
        RegistryType::Azure => REGISTRY_TYPE_AZURE,
        RegistryType::Quay => REGISTRY_TYPE_QUAY,
        RegistryType::Gitlab => REGISTRY_TYPE_GITLAB,
        RegistryType::Custom | RegistryType::Unknown(_) => REGISTRY_TYPE_CUSTOM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::model::Registry;
    use crate::store::MemoryStore;

    #[test]
    fn normalizes_registry_types() {
        let mut store = MemoryStore::with_identifier("id");
        store.registries = [
            RegistryType::Quay,
            RegistryType::Azure,
            RegistryType::Custom,
            RegistryType::Gitlab,
            RegistryType::Unknown(0),
            RegistryType::Unknown(17),
        ]
        .into_iter()
        .map(|kind| Registry {
            kind,
            ..Registry::default()
        })
        .collect();

        let mut data = TelemetryData::default();
        compute(&mut data, &store).unwrap();

        let types: Vec<&str> = data
            .registry
            .registries
            .iter()
            .map(|r| r.kind.as_str())
            .collect();
        assert_eq!(data.registry.count, 6);
        assert_eq!(types, vec!["quay", "azure", "custom", "gitlab", "custom", "custom"]);
    }
}
