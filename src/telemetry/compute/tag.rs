use crate::store::{DataStore, StoreResult};
use crate::telemetry::report::{TagTelemetry, TelemetryData};

pub fn compute(data: &mut TelemetryData, store: &dyn DataStore) -> StoreResult<()> {
    let tags = store.tags()?;

    data.tag = TagTelemetry { count: tags.len() };

    Ok(())
}
