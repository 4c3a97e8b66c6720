// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network attachment: a logical network wired to a NIC of a host

use serde::{Deserialize, Serialize};

use super::convert::{Fields, FromWire};
use super::host::Host;
use super::host_nic::HostNic;
use super::ids::{HostId, HostNicId, NetworkAttachmentId, NetworkId};
use super::network::Network;
use crate::errors::ClientResult;
use crate::retry::Retries;
use crate::wire::WireObject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkAttachmentData {
    pub id: NetworkAttachmentId,
    pub host_id: HostId,
    pub network_id: NetworkId,
    pub host_nic_id: HostNicId,
    pub comment: String,
    pub description: String,
}

impl FromWire for NetworkAttachmentData {
    const RESOURCE: &'static str = "network attachment";

    fn from_wire(wire: &WireObject) -> ClientResult<Self> {
        let mut fields = Fields::new(wire, Self::RESOURCE);
        let id = fields.id()?;
        let host_id = fields.required_ref("host")?;
        let network_id = fields.required_ref("network")?;
        let host_nic_id = fields.required_ref("host_nic")?;

        Ok(Self {
            id: id.into(),
            host_id: host_id.into(),
            network_id: network_id.into(),
            host_nic_id: host_nic_id.into(),
            comment: fields.optional_str("comment"),
            description: fields.optional_str("description"),
        })
    }
}

/// Optional settings for creating or updating a network attachment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAttachmentParams {
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub description: String,
}

impl NetworkAttachmentParams {
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
}

domain_object!(
    /// A network attachment as reported by the engine
    NetworkAttachment,
    NetworkAttachmentData
);

impl NetworkAttachment {
    pub async fn host(&self, retries: Retries) -> ClientResult<Host> {
        self.client.get_host(&self.data.host_id, retries).await
    }

    pub async fn network(&self, retries: Retries) -> ClientResult<Network> {
        self.client.get_network(&self.data.network_id, retries).await
    }

    pub async fn host_nic(&self, retries: Retries) -> ClientResult<HostNic> {
        self.client
            .get_host_nic(&self.data.host_id, &self.data.host_nic_id, retries)
            .await
    }

    /// Detach the network from the host NIC
    pub async fn remove(&self, retries: Retries) -> ClientResult<()> {
        self.client
            .remove_network_attachment(&self.data.host_id, &self.data.id, retries)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use serde_json::json;
    use test_case::test_case;

    fn full() -> serde_json::Value {
        json!({
            "id": "att-1",
            "host": { "id": "h-1" },
            "network": { "id": "net-1" },
            "host_nic": { "id": "nic-1" },
            "comment": "uplink"
        })
    }

    #[test]
    fn test_from_wire() {
        let data = NetworkAttachmentData::from_wire(&WireObject::from_value(full()).unwrap()).unwrap();
        assert_eq!(data.host_nic_id.as_str(), "nic-1");
        assert_eq!(data.comment, "uplink");
        assert_eq!(data.description, "");
    }

    #[test_case("host", "host.id")]
    #[test_case("network", "network.id")]
    #[test_case("host_nic", "host_nic.id")]
    fn test_missing_reference(key: &str, field: &str) {
        let wire = WireObject::from_value(full()).unwrap().without(key);
        let err = NetworkAttachmentData::from_wire(&wire).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FieldMissing);
        assert!(err.to_string().ends_with(&format!("network attachment att-1 has no {}", field)));
    }
}
