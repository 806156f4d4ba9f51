use crate::store::model::StackType;
use crate::store::{DataStore, StoreResult};
use crate::telemetry::report::{StackTelemetry, TelemetryData};

pub fn compute(data: &mut TelemetryData, store: &dyn DataStore) -> StoreResult<()> {
    let stacks = store.stacks()?;

    let standalone = stacks
        .iter()
        .filter(|s| s.kind == StackType::DockerCompose)
        .count();

    // Anything that is not compose-based is reported as swarm.
    data.stack = StackTelemetry {
        count: stacks.len(),
        standalone,
        swarm: stacks.len() - standalone,
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::model::Stack;
    use crate::store::MemoryStore;

    fn compute_for(kinds: &[StackType]) -> StackTelemetry {
        let mut store = MemoryStore::with_identifier("id");
        store.stacks = kinds
            .iter()
            .map(|&kind| Stack {
                kind,
                ..Stack::default()
            })
            .collect();
        let mut data = TelemetryData::default();
        compute(&mut data, &store).unwrap();
        data.stack
    }

    #[test]
    fn splits_compose_from_everything_else() {
        use StackType::*;
        let telemetry = compute_for(&[
            DockerCompose,
            DockerSwarm,
            DockerCompose,
            Kubernetes,
            Unknown(12),
        ]);

        assert_eq!(telemetry.count, 5);
        assert_eq!(telemetry.standalone, 2);
        assert_eq!(telemetry.swarm, 3);
    }

    #[test]
    fn partition_is_total() {
        use StackType::*;
        let collections: [&[StackType]; 4] = [
            &[],
            &[DockerSwarm],
            &[DockerCompose, DockerCompose],
            &[Unknown(0), DockerCompose, Kubernetes, DockerSwarm],
        ];
        for kinds in collections {
            let telemetry = compute_for(kinds);
            assert_eq!(telemetry.count, kinds.len());
            assert_eq!(telemetry.standalone + telemetry.swarm, telemetry.count);
        }
    }
}
