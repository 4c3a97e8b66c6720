// Copyright (c) 2025 - Cowboy AI, Inc.
//! Datacenter: the top-level container of clusters and networks

use serde::Serialize;

use super::convert::{Fields, FromWire};
use super::ids::DatacenterId;
use crate::errors::ClientResult;
use crate::wire::WireObject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatacenterData {
    pub id: DatacenterId,
    pub name: String,
    pub comment: String,
    pub description: String,
}

impl FromWire for DatacenterData {
    const RESOURCE: &'static str = "datacenter";

    fn from_wire(wire: &WireObject) -> ClientResult<Self> {
        let mut fields = Fields::new(wire, Self::RESOURCE);
        let id = fields.id()?;
        let name = fields.required_str("name")?;

        Ok(Self {
            id: id.into(),
            name,
            comment: fields.optional_str("comment"),
            description: fields.optional_str("description"),
        })
    }
}

domain_object!(
    /// A datacenter as reported by the engine
    Datacenter,
    DatacenterData
);
