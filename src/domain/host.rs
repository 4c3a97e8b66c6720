// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host: a hypervisor machine managed by the engine

use serde::Serialize;

use super::cluster::Cluster;
use super::convert::{Fields, FromWire};
use super::ids::{ClusterId, HostId};
use crate::errors::ClientResult;
use crate::retry::Retries;
use crate::wire::WireObject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostData {
    pub id: HostId,
    pub name: String,
    pub cluster_id: ClusterId,
    /// Management address, empty when unknown
    pub address: String,
    /// Engine-reported status such as `up` or `maintenance`
    pub status: String,
}

impl FromWire for HostData {
    const RESOURCE: &'static str = "host";

    fn from_wire(wire: &WireObject) -> ClientResult<Self> {
        let mut fields = Fields::new(wire, Self::RESOURCE);
        let id = fields.id()?;
        let name = fields.required_str("name")?;
        let cluster_id = fields.required_ref("cluster")?;

        Ok(Self {
            id: id.into(),
            name,
            cluster_id: cluster_id.into(),
            address: fields.optional_str("address"),
            status: fields.optional_str("status"),
        })
    }
}

domain_object!(
    /// A host as reported by the engine
    Host,
    HostData
);

impl Host {
    /// Fetch the cluster this host is a member of
    pub async fn cluster(&self, retries: Retries) -> ClientResult<Cluster> {
        self.client.get_cluster(&self.data.cluster_id, retries).await
    }
}
