use crate::store::{DataStore, StoreResult};
use crate::telemetry::report::{EndpointGroupTelemetry, TelemetryData};

pub fn compute(data: &mut TelemetryData, store: &dyn DataStore) -> StoreResult<()> {
    let groups = store.endpoint_groups()?;

    data.endpoint_group = EndpointGroupTelemetry {
        count: groups.len(),
    };

    Ok(())
}
