use crate::store::model::MembershipRole;
use crate::store::{DataStore, StoreResult};
use crate::telemetry::report::{TeamTelemetry, TelemetryData};

/// Reads teams then memberships; the section is only assigned once both
/// reads succeed.
pub fn compute(data: &mut TelemetryData, store: &dyn DataStore) -> StoreResult<()> {
    let teams = store.teams()?;
    let memberships = store.team_memberships()?;

    data.team = TeamTelemetry {
        count: teams.len(),
        team_leader_count: memberships
            .iter()
            .filter(|m| m.role == MembershipRole::TeamLeader)
            .count(),
    };

    Ok(())
}
