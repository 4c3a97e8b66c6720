// Copyright (c) 2025 - Cowboy AI, Inc.
//! VNIC profiles

use async_trait::async_trait;

use super::LiveClient;
use crate::client::validate;
use crate::client::VnicProfileClient;
use crate::domain::{NetworkId, VnicProfile, VnicProfileId, VnicProfileParams};
use crate::errors::ClientResult;
use crate::retry::Retries;
use crate::wire::{Request, WireObject};

fn profile_body(name: &str, params: &VnicProfileParams) -> WireObject {
    WireObject::new()
        .with("name", name)
        .with("comment", params.comment.as_str())
        .with("description", params.description.as_str())
        .with("pass_through", WireObject::new().with("mode", params.pass_through.as_str()))
        .with("port_mirroring", params.port_mirroring)
}

#[async_trait]
impl VnicProfileClient for LiveClient {
    async fn list_vnic_profiles(&self, retries: Retries) -> ClientResult<Vec<VnicProfile>> {
        self.fetch_list("listing VNIC profiles", retries, Request::get(["vnicprofiles"]), "vnic_profile")
            .await
    }

    async fn get_vnic_profile(&self, id: &VnicProfileId, retries: Retries) -> ClientResult<VnicProfile> {
        validate::id("VNIC profile", id)?;
        self.fetch(
            &format!("getting VNIC profile {}", id),
            retries,
            Request::get(["vnicprofiles", id.as_str()]),
        )
        .await
    }

    async fn create_vnic_profile(
        &self,
        name: &str,
        network: &NetworkId,
        params: VnicProfileParams,
        retries: Retries,
    ) -> ClientResult<VnicProfile> {
        validate::name("VNIC profile", name)?;
        validate::id("network", network)?;
        let body = profile_body(name, &params).with_ref("network", network.as_str());
        self.store(
            &format!("creating VNIC profile {}", name),
            retries,
            Request::post(["vnicprofiles"], body),
        )
        .await
    }

    async fn update_vnic_profile(
        &self,
        id: &VnicProfileId,
        name: &str,
        params: VnicProfileParams,
        retries: Retries,
    ) -> ClientResult<VnicProfile> {
        validate::name("VNIC profile", name)?;
        validate::id("VNIC profile", id)?;
        self.store(
            &format!("updating VNIC profile {}", id),
            retries,
            Request::put(["vnicprofiles", id.as_str()], profile_body(name, &params)),
        )
        .await
    }

    async fn remove_vnic_profile(&self, id: &VnicProfileId, retries: Retries) -> ClientResult<()> {
        validate::id("VNIC profile", id)?;
        self.discard(
            &format!("removing VNIC profile {}", id),
            retries,
            Request::delete(["vnicprofiles", id.as_str()]),
        )
        .await
    }
}
