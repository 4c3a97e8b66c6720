// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network assignments on clusters

use async_trait::async_trait;

use super::LiveClient;
use crate::client::validate;
use crate::client::ClusterNetworkClient;
use crate::domain::{ClusterId, ClusterNetwork, NetworkId};
use crate::errors::ClientResult;
use crate::retry::Retries;
use crate::wire::{Request, WireObject};

#[async_trait]
impl ClusterNetworkClient for LiveClient {
    async fn list_cluster_networks(&self, cluster: &ClusterId, retries: Retries) -> ClientResult<Vec<ClusterNetwork>> {
        validate::id("cluster", cluster)?;
        self.fetch_list(
            &format!("listing networks of cluster {}", cluster),
            retries,
            Request::get(["clusters", cluster.as_str(), "networks"]),
            "network",
        )
        .await
    }

    async fn get_cluster_network(
        &self,
        cluster: &ClusterId,
        network: &NetworkId,
        retries: Retries,
    ) -> ClientResult<ClusterNetwork> {
        validate::id("cluster", cluster)?;
        validate::id("network", network)?;
        self.fetch(
            &format!("getting network {} of cluster {}", network, cluster),
            retries,
            Request::get(["clusters", cluster.as_str(), "networks", network.as_str()]),
        )
        .await
    }

    async fn create_cluster_network(
        &self,
        cluster: &ClusterId,
        network: &NetworkId,
        required: bool,
        retries: Retries,
    ) -> ClientResult<ClusterNetwork> {
        validate::id("cluster", cluster)?;
        validate::id("network", network)?;
        let body = WireObject::new()
            .with("id", network.as_str())
            .with("required", required);
        self.store(
            &format!("adding network {} to cluster {}", network, cluster),
            retries,
            Request::post(["clusters", cluster.as_str(), "networks"], body),
        )
        .await
    }

    async fn update_cluster_network(
        &self,
        cluster: &ClusterId,
        network: &NetworkId,
        required: bool,
        retries: Retries,
    ) -> ClientResult<ClusterNetwork> {
        validate::id("cluster", cluster)?;
        validate::id("network", network)?;
        self.store(
            &format!("updating network {} of cluster {}", network, cluster),
            retries,
            Request::put(
                ["clusters", cluster.as_str(), "networks", network.as_str()],
                WireObject::new().with("required", required),
            ),
        )
        .await
    }

    async fn remove_cluster_network(&self, cluster: &ClusterId, network: &NetworkId, retries: Retries) -> ClientResult<()> {
        validate::id("cluster", cluster)?;
        validate::id("network", network)?;
        self.discard(
            &format!("removing network {} from cluster {}", network, cluster),
            retries,
            Request::delete(["clusters", cluster.as_str(), "networks", network.as_str()]),
        )
        .await
    }
}
