// Copyright (c) 2025 - Cowboy AI, Inc.
//! VNIC profiles

use async_trait::async_trait;

use super::MockClient;
use crate::client::validate;
use crate::client::VnicProfileClient;
use crate::domain::{NetworkId, VnicProfile, VnicProfileData, VnicProfileId, VnicProfileParams};
use crate::errors::ClientResult;
use crate::retry::Retries;

#[async_trait]
impl VnicProfileClient for MockClient {
    async fn list_vnic_profiles(&self, _retries: Retries) -> ClientResult<Vec<VnicProfile>> {
        let state = self.state.lock().await;
        Ok(self.attach_all(state.vnic_profiles.values()))
    }

    async fn get_vnic_profile(&self, id: &VnicProfileId, _retries: Retries) -> ClientResult<VnicProfile> {
        validate::id("VNIC profile", id)?;
        let state = self.state.lock().await;
        Ok(self.attach(state.vnic_profile(id)?.clone()))
    }

    async fn create_vnic_profile(
        &self,
        name: &str,
        network: &NetworkId,
        params: VnicProfileParams,
        _retries: Retries,
    ) -> ClientResult<VnicProfile> {
        validate::name("VNIC profile", name)?;
        validate::id("network", network)?;
        let mut state = self.state.lock().await;
        state.network(network)?;

        let data = VnicProfileData {
            id: VnicProfileId::generate(),
            name: name.to_string(),
            network_id: network.clone(),
            comment: params.comment,
            description: params.description,
            pass_through: params.pass_through,
            port_mirroring: params.port_mirroring,
        };
        state.vnic_profiles.insert(data.id.clone(), data.clone());

        Ok(self.attach(data))
    }

    async fn update_vnic_profile(
        &self,
        id: &VnicProfileId,
        name: &str,
        params: VnicProfileParams,
        _retries: Retries,
    ) -> ClientResult<VnicProfile> {
        validate::name("VNIC profile", name)?;
        validate::id("VNIC profile", id)?;
        let mut state = self.state.lock().await;

        let mut data = state.vnic_profile(id)?.clone();
        data.name = name.to_string();
        data.comment = params.comment;
        data.description = params.description;
        data.pass_through = params.pass_through;
        data.port_mirroring = params.port_mirroring;
        state.vnic_profiles.insert(id.clone(), data.clone());

        Ok(self.attach(data))
    }

    async fn remove_vnic_profile(&self, id: &VnicProfileId, _retries: Retries) -> ClientResult<()> {
        validate::id("VNIC profile", id)?;
        let mut state = self.state.lock().await;
        state.vnic_profile(id)?;
        state.vnic_profiles.remove(id);
        Ok(())
    }
}
