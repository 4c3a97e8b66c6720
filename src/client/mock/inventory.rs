// Copyright (c) 2025 - Cowboy AI, Inc.
//! Read-only inventory: datacenters, clusters, hosts and host NICs

use async_trait::async_trait;

use super::MockClient;
use crate::client::validate;
use crate::client::{ClusterClient, DatacenterClient, HostClient, HostNicClient};
use crate::domain::{Cluster, ClusterId, Datacenter, DatacenterId, Host, HostId, HostNic, HostNicId};
use crate::errors::ClientResult;
use crate::retry::Retries;

#[async_trait]
impl DatacenterClient for MockClient {
    async fn list_datacenters(&self, _retries: Retries) -> ClientResult<Vec<Datacenter>> {
        let state = self.state.lock().await;
        Ok(self.attach_all(state.datacenters.values()))
    }

    async fn get_datacenter(&self, id: &DatacenterId, _retries: Retries) -> ClientResult<Datacenter> {
        validate::id("datacenter", id)?;
        let state = self.state.lock().await;
        Ok(self.attach(state.datacenter(id)?.clone()))
    }
}

#[async_trait]
impl ClusterClient for MockClient {
    async fn list_clusters(&self, _retries: Retries) -> ClientResult<Vec<Cluster>> {
        let state = self.state.lock().await;
        Ok(self.attach_all(state.clusters.values()))
    }

    async fn get_cluster(&self, id: &ClusterId, _retries: Retries) -> ClientResult<Cluster> {
        validate::id("cluster", id)?;
        let state = self.state.lock().await;
        Ok(self.attach(state.cluster(id)?.clone()))
    }
}

#[async_trait]
impl HostClient for MockClient {
    async fn list_hosts(&self, _retries: Retries) -> ClientResult<Vec<Host>> {
        let state = self.state.lock().await;
        Ok(self.attach_all(state.hosts.values()))
    }

    async fn get_host(&self, id: &HostId, _retries: Retries) -> ClientResult<Host> {
        validate::id("host", id)?;
        let state = self.state.lock().await;
        Ok(self.attach(state.host(id)?.clone()))
    }
}

#[async_trait]
impl HostNicClient for MockClient {
    async fn list_host_nics(&self, host: &HostId, _retries: Retries) -> ClientResult<Vec<HostNic>> {
        validate::id("host", host)?;
        let state = self.state.lock().await;
        state.host(host)?;
        Ok(self.attach_all(state.host_nics.values().filter(|nic| &nic.host_id == host)))
    }

    async fn get_host_nic(&self, host: &HostId, nic: &HostNicId, _retries: Retries) -> ClientResult<HostNic> {
        validate::id("host", host)?;
        validate::id("host NIC", nic)?;
        let state = self.state.lock().await;
        Ok(self.attach(state.host_nic(host, nic)?.clone()))
    }
}
