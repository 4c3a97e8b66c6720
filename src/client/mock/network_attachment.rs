// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network attachments on host NICs

use async_trait::async_trait;
use tracing::debug;

use super::MockClient;
use crate::client::validate;
use crate::client::NetworkAttachmentClient;
use crate::domain::{
    HostId, HostNicId, NetworkAttachment, NetworkAttachmentData, NetworkAttachmentId, NetworkAttachmentParams,
    NetworkId,
};
use crate::errors::{ClientError, ClientResult};
use crate::retry::Retries;

#[async_trait]
impl NetworkAttachmentClient for MockClient {
    async fn list_network_attachments(&self, host: &HostId, _retries: Retries) -> ClientResult<Vec<NetworkAttachment>> {
        validate::id("host", host)?;
        let state = self.state.lock().await;
        state.host(host)?;
        Ok(self.attach_all(
            state
                .network_attachments
                .values()
                .filter(|attachment| &attachment.host_id == host),
        ))
    }

    async fn get_network_attachment(
        &self,
        host: &HostId,
        id: &NetworkAttachmentId,
        _retries: Retries,
    ) -> ClientResult<NetworkAttachment> {
        validate::id("host", host)?;
        validate::id("network attachment", id)?;
        let state = self.state.lock().await;
        Ok(self.attach(state.network_attachment(host, id)?.clone()))
    }

    async fn create_network_attachment(
        &self,
        host: &HostId,
        network: &NetworkId,
        host_nic: &HostNicId,
        params: NetworkAttachmentParams,
        _retries: Retries,
    ) -> ClientResult<NetworkAttachment> {
        validate::id("host", host)?;
        validate::id("network", network)?;
        validate::id("host NIC", host_nic)?;
        let mut state = self.state.lock().await;
        state.host_nic(host, host_nic)?;
        state.network(network)?;

        if state
            .network_attachments
            .values()
            .any(|attachment| &attachment.host_nic_id == host_nic && &attachment.network_id == network)
        {
            return Err(ClientError::bad_argument(format!(
                "network {} is already attached to NIC {} of host {}",
                network, host_nic, host
            )));
        }

        let data = NetworkAttachmentData {
            id: NetworkAttachmentId::generate(),
            host_id: host.clone(),
            network_id: network.clone(),
            host_nic_id: host_nic.clone(),
            comment: params.comment,
            description: params.description,
        };
        debug!(attachment = %data.id, %host, %network, nic = %host_nic, "Attached network");
        state.network_attachments.insert(data.id.clone(), data.clone());

        Ok(self.attach(data))
    }

    async fn update_network_attachment(
        &self,
        host: &HostId,
        id: &NetworkAttachmentId,
        params: NetworkAttachmentParams,
        _retries: Retries,
    ) -> ClientResult<NetworkAttachment> {
        validate::id("host", host)?;
        validate::id("network attachment", id)?;
        let mut state = self.state.lock().await;

        let mut data = state.network_attachment(host, id)?.clone();
        data.comment = params.comment;
        data.description = params.description;
        state.network_attachments.insert(id.clone(), data.clone());

        Ok(self.attach(data))
    }

    async fn remove_network_attachment(&self, host: &HostId, id: &NetworkAttachmentId, _retries: Retries) -> ClientResult<()> {
        validate::id("host", host)?;
        validate::id("network attachment", id)?;
        let mut state = self.state.lock().await;
        state.network_attachment(host, id)?;
        state.network_attachments.remove(id);
        debug!(attachment = %id, %host, "Detached network");
        Ok(())
    }
}
