// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource client interface
//!
//! One trait per resource type; [`Client`] combines them all. Two
//! implementations share the exact same contract:
//!
//! - [`LiveClient`] - talks to an engine through a [`Transport`](crate::wire::Transport),
//!   every call wrapped by the retry executor
//! - [`MockClient`] - in-memory engine for tests, seeded with a minimal
//!   inventory
//!
//! Every operation takes a trailing [`Retries`]. Pass `Retries::default()`
//! to use the read or write defaults from [`ClientConfig`](crate::config::ClientConfig).
//!
//! # Example
//!
//! ```rust
//! use ovirt_client::client::{MockClient, NetworkClient};
//! use ovirt_client::domain::NetworkParams;
//! use ovirt_client::retry::Retries;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ovirt_client::errors::ClientError> {
//! let client = MockClient::new();
//! let datacenter = client.seed().datacenter.clone();
//!
//! let network = client
//!     .create_network(&datacenter, "storage", NetworkParams::new(), Retries::default())
//!     .await?;
//! assert_eq!(network.datacenter(Retries::default()).await?.id, datacenter);
//! # Ok(())
//! # }
//! ```

pub mod live;
pub mod mock;
pub mod validate;

pub use live::LiveClient;
pub use mock::{MockClient, MockSeed};

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    Cluster, ClusterId, ClusterNetwork, Datacenter, DatacenterId, Host, HostId, HostNic, HostNicId,
    Network, NetworkAttachment, NetworkAttachmentId, NetworkAttachmentParams, NetworkId,
    NetworkParams, VnicProfile, VnicProfileId, VnicProfileParams,
};
use crate::errors::ClientResult;
use crate::retry::Retries;

#[async_trait]
pub trait DatacenterClient: Send + Sync {
    async fn list_datacenters(&self, retries: Retries) -> ClientResult<Vec<Datacenter>>;

    async fn get_datacenter(&self, id: &DatacenterId, retries: Retries) -> ClientResult<Datacenter>;
}

#[async_trait]
pub trait ClusterClient: Send + Sync {
    async fn list_clusters(&self, retries: Retries) -> ClientResult<Vec<Cluster>>;

    async fn get_cluster(&self, id: &ClusterId, retries: Retries) -> ClientResult<Cluster>;
}

#[async_trait]
pub trait HostClient: Send + Sync {
    async fn list_hosts(&self, retries: Retries) -> ClientResult<Vec<Host>>;

    async fn get_host(&self, id: &HostId, retries: Retries) -> ClientResult<Host>;
}

#[async_trait]
pub trait HostNicClient: Send + Sync {
    async fn list_host_nics(&self, host: &HostId, retries: Retries) -> ClientResult<Vec<HostNic>>;

    async fn get_host_nic(&self, host: &HostId, nic: &HostNicId, retries: Retries) -> ClientResult<HostNic>;
}

#[async_trait]
pub trait NetworkClient: Send + Sync {
    async fn list_networks(&self, retries: Retries) -> ClientResult<Vec<Network>>;

    async fn get_network(&self, id: &NetworkId, retries: Retries) -> ClientResult<Network>;

    /// Create a network in `datacenter`.
    ///
    /// `BadArgument` if `name` is empty (checked first) or `datacenter` is empty.
    async fn create_network(
        &self,
        datacenter: &DatacenterId,
        name: &str,
        params: NetworkParams,
        retries: Retries,
    ) -> ClientResult<Network>;

    /// Replace the name and optional settings of an existing network
    async fn update_network(
        &self,
        id: &NetworkId,
        name: &str,
        params: NetworkParams,
        retries: Retries,
    ) -> ClientResult<Network>;

    async fn remove_network(&self, id: &NetworkId, retries: Retries) -> ClientResult<()>;
}

#[async_trait]
pub trait ClusterNetworkClient: Send + Sync {
    async fn list_cluster_networks(&self, cluster: &ClusterId, retries: Retries) -> ClientResult<Vec<ClusterNetwork>>;

    async fn get_cluster_network(
        &self,
        cluster: &ClusterId,
        network: &NetworkId,
        retries: Retries,
    ) -> ClientResult<ClusterNetwork>;

    /// Assign an existing network to a cluster
    async fn create_cluster_network(
        &self,
        cluster: &ClusterId,
        network: &NetworkId,
        required: bool,
        retries: Retries,
    ) -> ClientResult<ClusterNetwork>;

    async fn update_cluster_network(
        &self,
        cluster: &ClusterId,
        network: &NetworkId,
        required: bool,
        retries: Retries,
    ) -> ClientResult<ClusterNetwork>;

    async fn remove_cluster_network(&self, cluster: &ClusterId, network: &NetworkId, retries: Retries) -> ClientResult<()>;
}

#[async_trait]
pub trait NetworkAttachmentClient: Send + Sync {
    async fn list_network_attachments(&self, host: &HostId, retries: Retries) -> ClientResult<Vec<NetworkAttachment>>;

    async fn get_network_attachment(
        &self,
        host: &HostId,
        id: &NetworkAttachmentId,
        retries: Retries,
    ) -> ClientResult<NetworkAttachment>;

    /// Attach `network` to `host_nic` on `host`
    async fn create_network_attachment(
        &self,
        host: &HostId,
        network: &NetworkId,
        host_nic: &HostNicId,
        params: NetworkAttachmentParams,
        retries: Retries,
    ) -> ClientResult<NetworkAttachment>;

    async fn update_network_attachment(
        &self,
        host: &HostId,
        id: &NetworkAttachmentId,
        params: NetworkAttachmentParams,
        retries: Retries,
    ) -> ClientResult<NetworkAttachment>;

    /// Detach a network from a host NIC. The live client also commits the
    /// host network configuration afterwards.
    async fn remove_network_attachment(&self, host: &HostId, id: &NetworkAttachmentId, retries: Retries) -> ClientResult<()>;
}

#[async_trait]
pub trait VnicProfileClient: Send + Sync {
    async fn list_vnic_profiles(&self, retries: Retries) -> ClientResult<Vec<VnicProfile>>;

    async fn get_vnic_profile(&self, id: &VnicProfileId, retries: Retries) -> ClientResult<VnicProfile>;

    async fn create_vnic_profile(
        &self,
        name: &str,
        network: &NetworkId,
        params: VnicProfileParams,
        retries: Retries,
    ) -> ClientResult<VnicProfile>;

    async fn update_vnic_profile(
        &self,
        id: &VnicProfileId,
        name: &str,
        params: VnicProfileParams,
        retries: Retries,
    ) -> ClientResult<VnicProfile>;

    async fn remove_vnic_profile(&self, id: &VnicProfileId, retries: Retries) -> ClientResult<()>;
}

/// The complete engine client
pub trait Client:
    DatacenterClient
    + ClusterClient
    + HostClient
    + HostNicClient
    + NetworkClient
    + ClusterNetworkClient
    + NetworkAttachmentClient
    + VnicProfileClient
{
}

impl<T> Client for T where
    T: DatacenterClient
        + ClusterClient
        + HostClient
        + HostNicClient
        + NetworkClient
        + ClusterNetworkClient
        + NetworkAttachmentClient
        + VnicProfileClient
{
}

/// Shared handle to the client that produced a domain object.
///
/// Cloning is cheap; all clones reach the same client state.
#[derive(Clone)]
pub struct ClientRef(Arc<dyn Client>);

impl ClientRef {
    pub fn new(client: impl Client + 'static) -> Self {
        Self(Arc::new(client))
    }
}

impl Deref for ClientRef {
    type Target = dyn Client;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for ClientRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientRef")
    }
}
