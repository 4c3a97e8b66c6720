// Copyright (c) 2025 - Cowboy AI, Inc.
//! Logical networks

use async_trait::async_trait;

use super::LiveClient;
use crate::client::validate;
use crate::client::NetworkClient;
use crate::domain::{DatacenterId, Network, NetworkId, NetworkParams};
use crate::errors::ClientResult;
use crate::retry::Retries;
use crate::wire::{Request, WireObject};

/// Request body shared by create and update
fn network_body(name: &str, params: &NetworkParams) -> WireObject {
    let body = WireObject::new()
        .with("name", name)
        .with("description", params.description.as_str())
        .with("comment", params.comment.as_str());

    match params.vlan {
        Some(vlan) => body.with("vlan", WireObject::new().with("id", vlan.value())),
        None => body,
    }
}

#[async_trait]
impl NetworkClient for LiveClient {
    async fn list_networks(&self, retries: Retries) -> ClientResult<Vec<Network>> {
        self.fetch_list("listing networks", retries, Request::get(["networks"]), "network")
            .await
    }

    async fn get_network(&self, id: &NetworkId, retries: Retries) -> ClientResult<Network> {
        validate::id("network", id)?;
        self.fetch(&format!("getting network {}", id), retries, Request::get(["networks", id.as_str()]))
            .await
    }

    async fn create_network(
        &self,
        datacenter: &DatacenterId,
        name: &str,
        params: NetworkParams,
        retries: Retries,
    ) -> ClientResult<Network> {
        validate::network_creation(name, datacenter)?;
        let body = network_body(name, &params).with_ref("data_center", datacenter.as_str());
        self.store(&format!("creating network {}", name), retries, Request::post(["networks"], body))
            .await
    }

    async fn update_network(
        &self,
        id: &NetworkId,
        name: &str,
        params: NetworkParams,
        retries: Retries,
    ) -> ClientResult<Network> {
        validate::name("network", name)?;
        validate::id("network", id)?;
        self.store(
            &format!("updating network {}", id),
            retries,
            Request::put(["networks", id.as_str()], network_body(name, &params)),
        )
        .await
    }

    async fn remove_network(&self, id: &NetworkId, retries: Retries) -> ClientResult<()> {
        validate::id("network", id)?;
        self.discard(&format!("removing network {}", id), retries, Request::delete(["networks", id.as_str()]))
            .await
    }
}
