use crate::store::model::ResourceControlType;
use crate::store::{DataStore, StoreResult};
use crate::telemetry::report::{ResourceControlTelemetry, TelemetryData};

pub fn compute(data: &mut TelemetryData, store: &dyn DataStore) -> StoreResult<()> {
    let resource_controls = store.resource_controls()?;

    let mut telemetry = ResourceControlTelemetry {
        count: resource_controls.len(),
        ..ResourceControlTelemetry::default()
    };

    for rc in &resource_controls {
        if let Some(bucket) = bucket(&mut telemetry, rc.kind) {
            *bucket += 1;
        }
    }

    data.resource_control = telemetry;

    Ok(())
}

/// Counter for `kind`, or `None` when the kind is not tracked per bucket.
fn bucket(telemetry: &mut ResourceControlTelemetry, kind: ResourceControlType) -> Option<&mut usize> {
    match kind {
        ResourceControlType::Container => Some(&mut telemetry.containers),
        ResourceControlType::Service => Some(&mut telemetry.services),
        ResourceControlType::Volume => Some(&mut telemetry.volumes),
        ResourceControlType::Network => Some(&mut telemetry.networks),
        ResourceControlType::Secret => Some(&mut telemetry.secrets),
        ResourceControlType::Config => Some(&mut telemetry.configs),
        ResourceControlType::Stack => Some(&mut telemetry.stacks),
        ResourceControlType::Unknown(_) => None,
    }
}
