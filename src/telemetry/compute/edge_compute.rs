use crate::store::model::JobType;
use crate::store::{DataStore, StoreResult};
use crate::telemetry::report::{EdgeComputeScheduleTelemetry, EdgeComputeTelemetry, TelemetryData};

// TODO: count edge groups and edge stacks once the store exposes them.
pub fn compute(data: &mut TelemetryData, store: &dyn DataStore) -> StoreResult<()> {
    let schedules = store.schedules()?;

    let recurring = schedules
        .iter()
        .filter(|s| s.job_type == JobType::ScriptExecution && s.recurring)
        .count();

    data.edge_compute = EdgeComputeTelemetry {
        schedule: EdgeComputeScheduleTelemetry {
            count: schedules.len(),
            recurring,
        },
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::model::Schedule;
    use crate::store::MemoryStore;

    fn schedule(job_type: JobType, recurring: bool) -> Schedule {
        Schedule {
            job_type,
            recurring,
            ..Schedule::default()
        }
    }

    #[test]
    fn counts_only_recurring_script_executions() {
        let mut store = MemoryStore::with_identifier("id");
        store.schedules = vec![
            schedule(JobType::ScriptExecution, true),
            schedule(JobType::ScriptExecution, false),
            schedule(JobType::Snapshot, true),
            schedule(JobType::EndpointSync, true),
            schedule(JobType::Unknown(9), true),
            schedule(JobType::ScriptExecution, true),
        ];

        let mut data = TelemetryData::default();
        compute(&mut data, &store).unwrap();
        assert_eq!(data.edge_compute.schedule.count, 6);
        assert_eq!(data.edge_compute.schedule.recurring, 2);
    }
}
