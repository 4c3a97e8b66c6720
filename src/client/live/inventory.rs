// Copyright (c) 2025 - Cowboy AI, Inc.
//! Read-only inventory: datacenters, clusters, hosts and host NICs

use async_trait::async_trait;

use super::LiveClient;
use crate::client::validate;
use crate::client::{ClusterClient, DatacenterClient, HostClient, HostNicClient};
use crate::domain::{Cluster, ClusterId, Datacenter, DatacenterId, Host, HostId, HostNic, HostNicId};
use crate::errors::ClientResult;
use crate::retry::Retries;
use crate::wire::Request;

#[async_trait]
impl DatacenterClient for LiveClient {
    async fn list_datacenters(&self, retries: Retries) -> ClientResult<Vec<Datacenter>> {
        self.fetch_list("listing datacenters", retries, Request::get(["datacenters"]), "data_center")
            .await
    }

    async fn get_datacenter(&self, id: &DatacenterId, retries: Retries) -> ClientResult<Datacenter> {
        validate::id("datacenter", id)?;
        self.fetch(
            &format!("getting datacenter {}", id),
            retries,
            Request::get(["datacenters", id.as_str()]),
        )
        .await
    }
}

#[async_trait]
impl ClusterClient for LiveClient {
    async fn list_clusters(&self, retries: Retries) -> ClientResult<Vec<Cluster>> {
        self.fetch_list("listing clusters", retries, Request::get(["clusters"]), "cluster")
            .await
    }

    async fn get_cluster(&self, id: &ClusterId, retries: Retries) -> ClientResult<Cluster> {
        validate::id("cluster", id)?;
        self.fetch(
            &format!("getting cluster {}", id),
            retries,
            Request::get(["clusters", id.as_str()]),
        )
        .await
    }
}

#[async_trait]
impl HostClient for LiveClient {
    async fn list_hosts(&self, retries: Retries) -> ClientResult<Vec<Host>> {
        self.fetch_list("listing hosts", retries, Request::get(["hosts"]), "host")
            .await
    }

    async fn get_host(&self, id: &HostId, retries: Retries) -> ClientResult<Host> {
        validate::id("host", id)?;
        self.fetch(&format!("getting host {}", id), retries, Request::get(["hosts", id.as_str()]))
            .await
    }
}

#[async_trait]
impl HostNicClient for LiveClient {
    async fn list_host_nics(&self, host: &HostId, retries: Retries) -> ClientResult<Vec<HostNic>> {
        validate::id("host", host)?;
        self.fetch_list(
            &format!("listing NICs of host {}", host),
            retries,
            Request::get(["hosts", host.as_str(), "nics"]),
            "host_nic",
        )
        .await
    }

    async fn get_host_nic(&self, host: &HostId, nic: &HostNicId, retries: Retries) -> ClientResult<HostNic> {
        validate::id("host", host)?;
        validate::id("host NIC", nic)?;
        self.fetch(
            &format!("getting NIC {} of host {}", nic, host),
            retries,
            Request::get(["hosts", host.as_str(), "nics", nic.as_str()]),
        )
        .await
    }
}
