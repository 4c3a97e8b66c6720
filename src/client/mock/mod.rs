// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory engine for tests
//!
//! [`MockClient`] satisfies the same contract as
//! [`LiveClient`](crate::client::LiveClient) without a transport:
//!
//! - arguments are validated identically (`BadArgument`)
//! - referenced resources must exist (`NotFound`)
//! - duplicate cluster networks and network attachments are rejected (`BadArgument`)
//! - retries are accepted and ignored, since nothing can fail transiently
//!
//! A fresh client holds a minimal inventory, see [`MockSeed`].

mod cluster_network;
mod inventory;
mod network;
mod network_attachment;
mod vnic_profile;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use super::ClientRef;
use crate::domain::convert::Resource;
use crate::domain::{
    ClusterData, ClusterId, ClusterNetworkData, DatacenterData, DatacenterId, HostData, HostId,
    HostNicData, HostNicId, MacAddress, NetworkAttachmentData, NetworkAttachmentId, NetworkData,
    NetworkId, PassThroughMode, VnicProfileData, VnicProfileId,
};
use crate::errors::{ClientError, ClientResult};

/// Identifiers of the inventory every fresh mock starts with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSeed {
    /// The `Default` datacenter
    pub datacenter: DatacenterId,
    /// The `Default` cluster
    pub cluster: ClusterId,
    pub host: HostId,
    /// NICs `eth0` and `eth1` of the host
    pub host_nics: [HostNicId; 2],
    /// The `ovirtmgmt` management network
    pub network: NetworkId,
    /// The `ovirtmgmt` VNIC profile
    pub vnic_profile: VnicProfileId,
}

/// Everything the mock engine stores
#[derive(Debug, Default)]
struct MockState {
    datacenters: BTreeMap<DatacenterId, DatacenterData>,
    clusters: BTreeMap<ClusterId, ClusterData>,
    hosts: BTreeMap<HostId, HostData>,
    host_nics: BTreeMap<HostNicId, HostNicData>,
    networks: BTreeMap<NetworkId, NetworkData>,
    cluster_networks: BTreeMap<(ClusterId, NetworkId), ClusterNetworkData>,
    network_attachments: BTreeMap<NetworkAttachmentId, NetworkAttachmentData>,
    vnic_profiles: BTreeMap<VnicProfileId, VnicProfileData>,
}

fn not_found(resource: &str, id: impl fmt::Display) -> ClientError {
    ClientError::not_found(format!("{} {} not found", resource, id))
}

impl MockState {
    fn seeded() -> (Self, MockSeed) {
        let mut state = Self::default();

        let datacenter = DatacenterData {
            id: DatacenterId::generate(),
            name: "Default".to_string(),
            comment: String::new(),
            description: "The default Data Center".to_string(),
        };
        let cluster = ClusterData {
            id: ClusterId::generate(),
            name: "Default".to_string(),
            datacenter_id: datacenter.id.clone(),
            comment: String::new(),
            description: "The default server cluster".to_string(),
        };
        let host = HostData {
            id: HostId::generate(),
            name: "node01".to_string(),
            cluster_id: cluster.id.clone(),
            address: "127.0.0.1".to_string(),
            status: "up".to_string(),
        };
        let nics = [("eth0", 1u8), ("eth1", 2u8)].map(|(name, last)| HostNicData {
            id: HostNicId::generate(),
            name: name.to_string(),
            host_id: host.id.clone(),
            mac: Some(MacAddress::from_octets([0x56, 0x6f, 0x1a, 0x2b, 0x00, last])),
            mtu: 1500,
        });
        let network = NetworkData {
            id: NetworkId::generate(),
            name: "ovirtmgmt".to_string(),
            datacenter_id: datacenter.id.clone(),
            description: "Management Network".to_string(),
            comment: String::new(),
            vlan: None,
        };
        let vnic_profile = VnicProfileData {
            id: VnicProfileId::generate(),
            name: "ovirtmgmt".to_string(),
            network_id: network.id.clone(),
            comment: String::new(),
            description: String::new(),
            pass_through: PassThroughMode::Disabled,
            port_mirroring: false,
        };

        let seed = MockSeed {
            datacenter: datacenter.id.clone(),
            cluster: cluster.id.clone(),
            host: host.id.clone(),
            host_nics: [nics[0].id.clone(), nics[1].id.clone()],
            network: network.id.clone(),
            vnic_profile: vnic_profile.id.clone(),
        };

        state.datacenters.insert(datacenter.id.clone(), datacenter);
        state.clusters.insert(cluster.id.clone(), cluster);
        state.hosts.insert(host.id.clone(), host);
        for nic in nics {
            state.host_nics.insert(nic.id.clone(), nic);
        }
        state.networks.insert(network.id.clone(), network);
        state.vnic_profiles.insert(vnic_profile.id.clone(), vnic_profile);

        (state, seed)
    }

    fn datacenter(&self, id: &DatacenterId) -> ClientResult<&DatacenterData> {
        self.datacenters.get(id).ok_or_else(|| not_found("datacenter", id))
    }

    fn cluster(&self, id: &ClusterId) -> ClientResult<&ClusterData> {
        self.clusters.get(id).ok_or_else(|| not_found("cluster", id))
    }

    fn host(&self, id: &HostId) -> ClientResult<&HostData> {
        self.hosts.get(id).ok_or_else(|| not_found("host", id))
    }

    /// A NIC only counts as found on the host that carries it
    fn host_nic(&self, host: &HostId, id: &HostNicId) -> ClientResult<&HostNicData> {
        self.host(host)?;
        self.host_nics
            .get(id)
            .filter(|nic| &nic.host_id == host)
            .ok_or_else(|| not_found("host NIC", format!("{} on host {}", id, host)))
    }

    fn network(&self, id: &NetworkId) -> ClientResult<&NetworkData> {
        self.networks.get(id).ok_or_else(|| not_found("network", id))
    }

    fn cluster_network(&self, cluster: &ClusterId, network: &NetworkId) -> ClientResult<&ClusterNetworkData> {
        self.cluster(cluster)?;
        self.cluster_networks
            .get(&(cluster.clone(), network.clone()))
            .ok_or_else(|| not_found("network", format!("{} on cluster {}", network, cluster)))
    }

    fn network_attachment(&self, host: &HostId, id: &NetworkAttachmentId) -> ClientResult<&NetworkAttachmentData> {
        self.host(host)?;
        self.network_attachments
            .get(id)
            .filter(|attachment| &attachment.host_id == host)
            .ok_or_else(|| not_found("network attachment", format!("{} on host {}", id, host)))
    }

    fn vnic_profile(&self, id: &VnicProfileId) -> ClientResult<&VnicProfileData> {
        self.vnic_profiles.get(id).ok_or_else(|| not_found("VNIC profile", id))
    }
}

/// In-memory engine client.
///
/// Cloning is cheap: clones share the same state, so a domain object
/// returned by one clone observes writes made through another.
#[derive(Clone)]
pub struct MockClient {
    state: Arc<Mutex<MockState>>,
    seed: Arc<MockSeed>,
}

impl MockClient {
    /// Create a mock holding the seed inventory
    pub fn new() -> Self {
        let (state, seed) = MockState::seeded();
        debug!(datacenter = %seed.datacenter, host = %seed.host, "Seeded mock engine");

        Self {
            state: Arc::new(Mutex::new(state)),
            seed: Arc::new(seed),
        }
    }

    /// Identifiers of the seed inventory
    pub fn seed(&self) -> &MockSeed {
        &self.seed
    }

    pub fn handle(&self) -> ClientRef {
        ClientRef::new(self.clone())
    }

    fn attach<R: Resource>(&self, data: R::Data) -> R {
        R::attach(data, self.handle())
    }

    fn attach_all<'a, R, I>(&self, items: I) -> Vec<R>
    where
        R: Resource,
        R::Data: Clone + 'a,
        I: IntoIterator<Item = &'a R::Data>,
    {
        let client = self.handle();
        items
            .into_iter()
            .map(|data| R::attach(data.clone(), client.clone()))
            .collect()
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MockClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockClient").field("seed", &self.seed).finish_non_exhaustive()
    }
}
