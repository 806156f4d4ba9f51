use crate::store::model::{DockerSnapshot, Endpoint, EndpointType};
use crate::store::{DataStore, StoreResult};
use crate::telemetry::report::{
    EndpointDockerTelemetry, EndpointEnvironmentTelemetry, EndpointTelemetry, TelemetryData,
    ENDPOINT_ENVIRONMENT_DOCKER,
};

pub fn compute(data: &mut TelemetryData, store: &dyn DataStore) -> StoreResult<()> {
    let endpoints = store.endpoints()?;

    data.endpoint = EndpointTelemetry {
        count: endpoints.len(),
        endpoints: endpoints.iter().map(environment).collect(),
    };

    Ok(())
}

/// Docker-family endpoints are described from their latest snapshot; any
/// other kind yields an empty entry.
fn environment(endpoint: &Endpoint) -> EndpointEnvironmentTelemetry {
    let (agent, edge) = match endpoint.kind {
        EndpointType::Docker => (false, false),
        EndpointType::AgentOnDocker => (true, false),
        EndpointType::EdgeAgentOnDocker => (true, true),
        EndpointType::Azure
        | EndpointType::KubernetesLocal
        | EndpointType::AgentOnKubernetes
        | EndpointType::EdgeAgentOnKubernetes
        | EndpointType::Unknown(_) => return EndpointEnvironmentTelemetry::default(),
    };

    EndpointEnvironmentTelemetry {
        environment: ENDPOINT_ENVIRONMENT_DOCKER.to_string(),
        agent,
        edge,
        docker: endpoint
            .snapshots
            .first()
            .map(docker_snapshot)
            .unwrap_or_default(),
        ..EndpointEnvironmentTelemetry::default()
    }
}

fn docker_snapshot(snapshot: &DockerSnapshot) -> EndpointDockerTelemetry {
    EndpointDockerTelemetry {
        version: snapshot.docker_version.clone(),
        swarm: snapshot.swarm,
        containers: snapshot
            .healthy_container_count
            .saturating_add(snapshot.running_container_count)
            .saturating_add(snapshot.stopped_container_count)
            .saturating_add(snapshot.unhealthy_container_count),
        images: snapshot.image_count,
        volumes: snapshot.volume_count,
        services: snapshot.service_count,
        stacks: snapshot.stack_count,
        nodes: snapshot.node_count,
    }
}
