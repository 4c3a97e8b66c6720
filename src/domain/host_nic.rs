// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host NIC: a physical network interface on a host

use serde::Serialize;

use super::convert::{Fields, FromWire};
use super::host::Host;
use super::ids::{HostId, HostNicId};
use super::values::MacAddress;
use crate::errors::ClientResult;
use crate::retry::Retries;
use crate::wire::WireObject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostNicData {
    pub id: HostNicId,
    pub name: String,
    pub host_id: HostId,
    pub mac: Option<MacAddress>,
    /// Configured MTU, 0 when the engine does not report one
    pub mtu: u32,
}

impl FromWire for HostNicData {
    const RESOURCE: &'static str = "host nic";

    fn from_wire(wire: &WireObject) -> ClientResult<Self> {
        let mut fields = Fields::new(wire, Self::RESOURCE);
        let id = fields.id()?;
        let name = fields.required_str("name")?;
        let host_id = fields.required_ref("host")?;

        let mac = fields
            .optional_nested_str("mac", "address")
            .map(|raw| MacAddress::new(&raw))
            .transpose()
            .map_err(|err| fields.invalid("mac.address", err))?;

        let mtu = match fields.optional_i64("mtu") {
            Some(raw) => u32::try_from(raw).map_err(|err| fields.invalid("mtu", err))?,
            None => 0,
        };

        Ok(Self {
            id: id.into(),
            name,
            host_id: host_id.into(),
            mac,
            mtu,
        })
    }
}

domain_object!(
    /// A host NIC as reported by the engine
    HostNic,
    HostNicData
);

impl HostNic {
    /// Fetch the host carrying this NIC
    pub async fn host(&self, retries: Retries) -> ClientResult<Host> {
        self.client.get_host(&self.data.host_id, retries).await
    }
}
