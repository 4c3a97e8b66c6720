// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network assignments on clusters

use async_trait::async_trait;

use super::MockClient;
use crate::client::validate;
use crate::client::ClusterNetworkClient;
use crate::domain::{ClusterId, ClusterNetwork, ClusterNetworkData, NetworkId};
use crate::errors::{ClientError, ClientResult};
use crate::retry::Retries;

#[async_trait]
impl ClusterNetworkClient for MockClient {
    async fn list_cluster_networks(&self, cluster: &ClusterId, _retries: Retries) -> ClientResult<Vec<ClusterNetwork>> {
        validate::id("cluster", cluster)?;
        let state = self.state.lock().await;
        state.cluster(cluster)?;
        Ok(self.attach_all(
            state
                .cluster_networks
                .values()
                .filter(|assignment| &assignment.cluster_id == cluster),
        ))
    }

    async fn get_cluster_network(
        &self,
        cluster: &ClusterId,
        network: &NetworkId,
        _retries: Retries,
    ) -> ClientResult<ClusterNetwork> {
        validate::id("cluster", cluster)?;
        validate::id("network", network)?;
        let state = self.state.lock().await;
        Ok(self.attach(state.cluster_network(cluster, network)?.clone()))
    }

    async fn create_cluster_network(
        &self,
        cluster: &ClusterId,
        network: &NetworkId,
        required: bool,
        _retries: Retries,
    ) -> ClientResult<ClusterNetwork> {
        validate::id("cluster", cluster)?;
        validate::id("network", network)?;
        let mut state = self.state.lock().await;

        let cluster_datacenter = state.cluster(cluster)?.datacenter_id.clone();
        let network_datacenter = &state.network(network)?.datacenter_id;
        if network_datacenter != &cluster_datacenter {
            return Err(ClientError::bad_argument(format!(
                "network {} belongs to datacenter {}, cluster {} to datacenter {}",
                network, network_datacenter, cluster, cluster_datacenter
            )));
        }

        let key = (cluster.clone(), network.clone());
        if state.cluster_networks.contains_key(&key) {
            return Err(ClientError::bad_argument(format!(
                "network {} is already assigned to cluster {}",
                network, cluster
            )));
        }

        let data = ClusterNetworkData {
            network_id: network.clone(),
            cluster_id: cluster.clone(),
            required,
        };
        state.cluster_networks.insert(key, data.clone());

        Ok(self.attach(data))
    }

    async fn update_cluster_network(
        &self,
        cluster: &ClusterId,
        network: &NetworkId,
        required: bool,
        _retries: Retries,
    ) -> ClientResult<ClusterNetwork> {
        validate::id("cluster", cluster)?;
        validate::id("network", network)?;
        let mut state = self.state.lock().await;

        let mut data = state.cluster_network(cluster, network)?.clone();
        data.required = required;
        state
            .cluster_networks
            .insert((cluster.clone(), network.clone()), data.clone());

        Ok(self.attach(data))
    }

    async fn remove_cluster_network(&self, cluster: &ClusterId, network: &NetworkId, _retries: Retries) -> ClientResult<()> {
        validate::id("cluster", cluster)?;
        validate::id("network", network)?;
        let mut state = self.state.lock().await;
        state.cluster_network(cluster, network)?;
        state.cluster_networks.remove(&(cluster.clone(), network.clone()));
        Ok(())
    }
}
