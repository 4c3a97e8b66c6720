// Copyright (c) 2025 - Cowboy AI, Inc.
//! Logical networks

use async_trait::async_trait;
use tracing::debug;

use super::{MockClient, MockState};
use crate::client::validate;
use crate::client::NetworkClient;
use crate::domain::{DatacenterId, Network, NetworkData, NetworkId, NetworkParams};
use crate::errors::{ClientError, ClientResult};
use crate::retry::Retries;

/// Network names are unique within a datacenter; `renaming` is exempt from
/// clashing with itself.
fn unique_name(
    state: &MockState,
    datacenter: &DatacenterId,
    name: &str,
    renaming: Option<&NetworkId>,
) -> ClientResult<()> {
    let taken = state.networks.values().any(|network| {
        &network.datacenter_id == datacenter && network.name == name && Some(&network.id) != renaming
    });
    if taken {
        return Err(ClientError::bad_argument(format!(
            "network {} already exists in datacenter {}",
            name, datacenter
        )));
    }
    Ok(())
}

#[async_trait]
impl NetworkClient for MockClient {
    async fn list_networks(&self, _retries: Retries) -> ClientResult<Vec<Network>> {
        let state = self.state.lock().await;
        Ok(self.attach_all(state.networks.values()))
    }

    async fn get_network(&self, id: &NetworkId, _retries: Retries) -> ClientResult<Network> {
        validate::id("network", id)?;
        let state = self.state.lock().await;
        Ok(self.attach(state.network(id)?.clone()))
    }

    async fn create_network(
        &self,
        datacenter: &DatacenterId,
        name: &str,
        params: NetworkParams,
        _retries: Retries,
    ) -> ClientResult<Network> {
        validate::network_creation(name, datacenter)?;
        let mut state = self.state.lock().await;
        state.datacenter(datacenter)?;

        unique_name(&state, datacenter, name, None)?;

        let data = NetworkData {
            id: NetworkId::generate(),
            name: name.to_string(),
            datacenter_id: datacenter.clone(),
            description: params.description,
            comment: params.comment,
            vlan: params.vlan,
        };
        debug!(network = %data.id, %datacenter, "Created network");
        state.networks.insert(data.id.clone(), data.clone());

        Ok(self.attach(data))
    }

    async fn update_network(
        &self,
        id: &NetworkId,
        name: &str,
        params: NetworkParams,
        _retries: Retries,
    ) -> ClientResult<Network> {
        validate::name("network", name)?;
        validate::id("network", id)?;
        let mut state = self.state.lock().await;

        let mut data = state.network(id)?.clone();
        unique_name(&state, &data.datacenter_id, name, Some(id))?;
        data.name = name.to_string();
        data.description = params.description;
        data.comment = params.comment;
        data.vlan = params.vlan;
        state.networks.insert(id.clone(), data.clone());

        Ok(self.attach(data))
    }

    /// Removing a network also drops its cluster assignments, VNIC profiles
    /// and host attachments.
    async fn remove_network(&self, id: &NetworkId, _retries: Retries) -> ClientResult<()> {
        validate::id("network", id)?;
        let mut state = self.state.lock().await;
        state.network(id)?;

        state.networks.remove(id);
        state.cluster_networks.retain(|(_, network), _| network != id);
        state.vnic_profiles.retain(|_, profile| &profile.network_id != id);
        state.network_attachments.retain(|_, attachment| &attachment.network_id != id);
        debug!(network = %id, "Removed network");

        Ok(())
    }
}
