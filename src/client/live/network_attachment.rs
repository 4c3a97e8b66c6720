// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network attachments on host NICs

use async_trait::async_trait;

use super::LiveClient;
use crate::client::validate;
use crate::client::NetworkAttachmentClient;
use crate::domain::{HostId, HostNicId, NetworkAttachment, NetworkAttachmentId, NetworkAttachmentParams, NetworkId};
use crate::errors::ClientResult;
use crate::retry::Retries;
use crate::wire::{Request, WireObject};

fn attachment_body(params: &NetworkAttachmentParams) -> WireObject {
    WireObject::new()
        .with("comment", params.comment.as_str())
        .with("description", params.description.as_str())
}

#[async_trait]
impl NetworkAttachmentClient for LiveClient {
    async fn list_network_attachments(&self, host: &HostId, retries: Retries) -> ClientResult<Vec<NetworkAttachment>> {
        validate::id("host", host)?;
        self.fetch_list(
            &format!("listing network attachments of host {}", host),
            retries,
            Request::get(["hosts", host.as_str(), "networkattachments"]),
            "network_attachment",
        )
        .await
    }

    async fn get_network_attachment(
        &self,
        host: &HostId,
        id: &NetworkAttachmentId,
        retries: Retries,
    ) -> ClientResult<NetworkAttachment> {
        validate::id("host", host)?;
        validate::id("network attachment", id)?;
        self.fetch(
            &format!("getting network attachment {} of host {}", id, host),
            retries,
            Request::get(["hosts", host.as_str(), "networkattachments", id.as_str()]),
        )
        .await
    }

    async fn create_network_attachment(
        &self,
        host: &HostId,
        network: &NetworkId,
        host_nic: &HostNicId,
        params: NetworkAttachmentParams,
        retries: Retries,
    ) -> ClientResult<NetworkAttachment> {
        validate::id("host", host)?;
        validate::id("network", network)?;
        validate::id("host NIC", host_nic)?;
        let body = attachment_body(&params)
            .with_ref("network", network.as_str())
            .with_ref("host_nic", host_nic.as_str());
        self.store(
            &format!("attaching network {} to host {} on NIC {}", network, host, host_nic),
            retries,
            Request::post(["hosts", host.as_str(), "networkattachments"], body),
        )
        .await
    }

    async fn update_network_attachment(
        &self,
        host: &HostId,
        id: &NetworkAttachmentId,
        params: NetworkAttachmentParams,
        retries: Retries,
    ) -> ClientResult<NetworkAttachment> {
        validate::id("host", host)?;
        validate::id("network attachment", id)?;
        self.store(
            &format!("updating network attachment {} of host {}", id, host),
            retries,
            Request::put(
                ["hosts", host.as_str(), "networkattachments", id.as_str()],
                attachment_body(&params),
            ),
        )
        .await
    }

    async fn remove_network_attachment(&self, host: &HostId, id: &NetworkAttachmentId, retries: Retries) -> ClientResult<()> {
        validate::id("host", host)?;
        validate::id("network attachment", id)?;
        self.discard(
            &format!("removing network attachment {} from host {}", id, host),
            retries.clone(),
            Request::delete(["hosts", host.as_str(), "networkattachments", id.as_str()]),
        )
        .await?;

        // Without a commit the engine reverts the change on the next host reboot.
        self.discard(
            &format!("committing network configuration of host {}", host),
            retries,
            Request::post(
                ["hosts", host.as_str(), "commitnetconfig"],
                WireObject::new().with("async", "true"),
            ),
        )
        .await
    }
}
