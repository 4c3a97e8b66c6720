// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster: a group of hosts sharing networks and storage within a datacenter

use serde::Serialize;

use super::convert::{Fields, FromWire};
use super::datacenter::Datacenter;
use super::ids::{ClusterId, DatacenterId};
use crate::errors::ClientResult;
use crate::retry::Retries;
use crate::wire::WireObject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterData {
    pub id: ClusterId,
    pub name: String,
    pub datacenter_id: DatacenterId,
    pub comment: String,
    pub description: String,
}

impl FromWire for ClusterData {
    const RESOURCE: &'static str = "cluster";

    fn from_wire(wire: &WireObject) -> ClientResult<Self> {
        let mut fields = Fields::new(wire, Self::RESOURCE);
        let id = fields.id()?;
        let name = fields.required_str("name")?;
        let datacenter_id = fields.required_ref("data_center")?;

        Ok(Self {
            id: id.into(),
            name,
            datacenter_id: datacenter_id.into(),
            comment: fields.optional_str("comment"),
            description: fields.optional_str("description"),
        })
    }
}

domain_object!(
    /// A cluster as reported by the engine
    Cluster,
    ClusterData
);

impl Cluster {
    /// Fetch the datacenter this cluster belongs to
    pub async fn datacenter(&self, retries: Retries) -> ClientResult<Datacenter> {
        self.client.get_datacenter(&self.data.datacenter_id, retries).await
    }
}
