// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster network: a logical network assigned to a cluster
//!
//! The engine reports these as network records listed under a cluster, so
//! the identity of a cluster network is the pair (cluster, network).

use serde::Serialize;

use super::cluster::Cluster;
use super::convert::{Fields, FromWire};
use super::ids::{ClusterId, NetworkId};
use super::network::Network;
use crate::errors::ClientResult;
use crate::retry::Retries;
use crate::wire::WireObject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterNetworkData {
    pub network_id: NetworkId,
    pub cluster_id: ClusterId,
    /// Whether hosts in the cluster must carry the network to be operational
    pub required: bool,
}

impl FromWire for ClusterNetworkData {
    const RESOURCE: &'static str = "cluster network";

    fn from_wire(wire: &WireObject) -> ClientResult<Self> {
        let mut fields = Fields::new(wire, Self::RESOURCE);
        let network_id = fields.id()?;
        let cluster_id = fields.required_ref("cluster")?;

        Ok(Self {
            network_id: network_id.into(),
            cluster_id: cluster_id.into(),
            required: fields.optional_bool("required"),
        })
    }
}

domain_object!(
    /// A network assignment on a cluster
    ClusterNetwork,
    ClusterNetworkData
);

impl ClusterNetwork {
    pub async fn cluster(&self, retries: Retries) -> ClientResult<Cluster> {
        self.client.get_cluster(&self.data.cluster_id, retries).await
    }

    pub async fn network(&self, retries: Retries) -> ClientResult<Network> {
        self.client.get_network(&self.data.network_id, retries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stringly_required_flag() {
        let wire = WireObject::from_value(json!({
            "id": "net-1",
            "cluster": { "id": "c-1" },
            "required": "true"
        }))
        .unwrap();

        let data = ClusterNetworkData::from_wire(&wire).unwrap();
        assert!(data.required);
        assert_eq!(data.network_id.as_str(), "net-1");
    }

    #[test]
    fn test_required_defaults_to_false() {
        let wire = WireObject::from_value(json!({
            "id": "net-1",
            "cluster": { "id": "c-1" }
        }))
        .unwrap();

        assert!(!ClusterNetworkData::from_wire(&wire).unwrap().required);
    }
}
