// Copyright (c) 2025 - Cowboy AI, Inc.
//! Logical network defined in a datacenter

use serde::{Deserialize, Serialize};

use super::convert::{Fields, FromWire};
use super::datacenter::Datacenter;
use super::ids::{DatacenterId, NetworkId};
use super::values::VlanId;
use crate::errors::ClientResult;
use crate::retry::Retries;
use crate::wire::WireObject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkData {
    pub id: NetworkId,
    pub name: String,
    pub datacenter_id: DatacenterId,
    pub description: String,
    pub comment: String,
    /// VLAN tag; `None` for an untagged network
    pub vlan: Option<VlanId>,
}

impl FromWire for NetworkData {
    const RESOURCE: &'static str = "network";

    fn from_wire(wire: &WireObject) -> ClientResult<Self> {
        let mut fields = Fields::new(wire, Self::RESOURCE);
        let id = fields.id()?;
        let name = fields.required_str("name")?;
        let datacenter_id = fields.required_ref("data_center")?;

        let vlan = fields
            .optional_nested_i64("vlan", "id")
            .map(VlanId::new)
            .transpose()
            .map_err(|err| fields.invalid("vlan.id", err))?;

        Ok(Self {
            id: id.into(),
            name,
            datacenter_id: datacenter_id.into(),
            description: fields.optional_str("description"),
            comment: fields.optional_str("comment"),
            vlan,
        })
    }
}

/// Optional settings for creating or updating a network
///
/// # Examples
///
/// ```rust
/// use ovirt_client::domain::{NetworkParams, VlanId};
///
/// let params = NetworkParams::new()
///     .with_description("storage backbone")
///     .with_vlan(VlanId::new(120).unwrap());
/// assert_eq!(params.vlan.map(|v| v.value()), Some(120));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkParams {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub vlan: Option<VlanId>,
}

impl NetworkParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_vlan(mut self, vlan: VlanId) -> Self {
        self.vlan = Some(vlan);
        self
    }
}

domain_object!(
    /// A logical network as reported by the engine
    Network,
    NetworkData
);

impl Network {
    /// Fetch the datacenter the network is defined in
    pub async fn datacenter(&self, retries: Retries) -> ClientResult<Datacenter> {
        self.client.get_datacenter(&self.data.datacenter_id, retries).await
    }

    /// Remove this network from the engine
    pub async fn remove(&self, retries: Retries) -> ClientResult<()> {
        self.client.remove_network(&self.data.id, retries).await
    }
}
