// Copyright (c) 2025 - Cowboy AI, Inc.
//! VNIC profile: the settings a virtual NIC inherits when plugged into a network

use std::fmt;

use serde::{Deserialize, Serialize};

use super::convert::{Fields, FromWire};
use super::ids::{NetworkId, VnicProfileId};
use super::network::Network;
use crate::errors::ClientResult;
use crate::retry::Retries;
use crate::wire::WireObject;

/// Device pass-through mode of a VNIC profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassThroughMode {
    #[default]
    Disabled,
    Enabled,
}

impl PassThroughMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassThroughMode::Disabled => "disabled",
            PassThroughMode::Enabled => "enabled",
        }
    }

    /// Anything the engine reports other than `enabled` counts as disabled
    fn from_wire(mode: Option<&str>) -> Self {
        match mode {
            Some("enabled") => PassThroughMode::Enabled,
            _ => PassThroughMode::Disabled,
        }
    }
}

impl fmt::Display for PassThroughMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VnicProfileData {
    pub id: VnicProfileId,
    pub name: String,
    pub network_id: NetworkId,
    pub comment: String,
    pub description: String,
    pub pass_through: PassThroughMode,
    pub port_mirroring: bool,
}

impl FromWire for VnicProfileData {
    const RESOURCE: &'static str = "vnic profile";

    fn from_wire(wire: &WireObject) -> ClientResult<Self> {
        let mut fields = Fields::new(wire, Self::RESOURCE);
        let id = fields.id()?;
        let name = fields.required_str("name")?;
        let network_id = fields.required_ref("network")?;
        let pass_through = fields.optional_nested_str("pass_through", "mode");

        Ok(Self {
            id: id.into(),
            name,
            network_id: network_id.into(),
            comment: fields.optional_str("comment"),
            description: fields.optional_str("description"),
            pass_through: PassThroughMode::from_wire(pass_through.as_deref()),
            port_mirroring: fields.optional_bool("port_mirroring"),
        })
    }
}

/// Optional settings for creating or updating a VNIC profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VnicProfileParams {
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pass_through: PassThroughMode,
    #[serde(default)]
    pub port_mirroring: bool,
}

impl VnicProfileParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_pass_through(mut self, mode: PassThroughMode) -> Self {
        self.pass_through = mode;
        self
    }

    pub fn with_port_mirroring(mut self, enabled: bool) -> Self {
        self.port_mirroring = enabled;
        self
    }
}

domain_object!(
    /// A VNIC profile as reported by the engine
    VnicProfile,
    VnicProfileData
);

impl VnicProfile {
    pub async fn network(&self, retries: Retries) -> ClientResult<Network> {
        self.client.get_network(&self.data.network_id, retries).await
    }

    pub async fn remove(&self, retries: Retries) -> ClientResult<()> {
        self.client.remove_vnic_profile(&self.data.id, retries).await
    }
}
