// Copyright (c) 2025 - Cowboy AI, Inc.
//! Engine Domain Models
//!
//! Immutable, strongly-typed views of engine resources. Every resource comes
//! in two halves:
//!
//! - `<Resource>Data` - plain fields, comparable and serializable, no client
//! - `<Resource>` - the data plus a [`ClientRef`](crate::client::ClientRef)
//!   to the client that produced it, offering lazy relationship accessors
//!
//! # Value Objects with Invariants
//!
//! - [`VlanId`] - IEEE 802.1Q VLAN ID (1-4094)
//! - [`MacAddress`] - 48-bit MAC address
//!
//! # Relationships
//!
//! Objects reference each other by identifier only. Accessors such as
//! [`Cluster::datacenter`] resolve an identifier with a fresh remote call
//! every time; nothing is cached.
//!
//! ```text
//! Datacenter <── Cluster <── Host <── HostNic
//!     ^             ^         ^          ^
//!  Network <── ClusterNetwork  NetworkAttachment (host, network, host nic)
//!     ^
//!  VnicProfile
//! ```

/// Declares the client-bound half of a resource.
///
/// The generated type dereferences to its data, compares by data only and
/// implements [`Resource`] so the conversion functions can build it.
macro_rules! domain_object {
    ($(#[$meta:meta])* $name:ident, $data:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            data: $data,
            client: $crate::client::ClientRef,
        }

        impl $name {
            pub fn data(&self) -> &$data {
                &self.data
            }

            pub fn into_data(self) -> $data {
                self.data
            }
        }

        impl std::ops::Deref for $name {
            type Target = $data;

            fn deref(&self) -> &$data {
                &self.data
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Debug::fmt(&self.data, f)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.data == other.data
            }
        }

        impl $crate::domain::convert::Resource for $name {
            type Data = $data;

            fn attach(data: $data, client: $crate::client::ClientRef) -> Self {
                Self { data, client }
            }
        }
    };
}

pub mod cluster;
pub mod cluster_network;
pub mod convert;
pub mod datacenter;
pub mod host;
pub mod host_nic;
pub mod ids;
pub mod network;
pub mod network_attachment;
pub mod values;
pub mod vnic_profile;

pub use cluster::{Cluster, ClusterData};
pub use cluster_network::{ClusterNetwork, ClusterNetworkData};
pub use convert::{convert, convert_list, FromWire, Resource};
pub use datacenter::{Datacenter, DatacenterData};
pub use host::{Host, HostData};
pub use host_nic::{HostNic, HostNicData};
pub use ids::{
    ClusterId, DatacenterId, HostId, HostNicId, NetworkAttachmentId, NetworkId, VnicProfileId,
};
pub use network::{Network, NetworkData, NetworkParams};
pub use network_attachment::{NetworkAttachment, NetworkAttachmentData, NetworkAttachmentParams};
pub use values::{MacAddress, ValueError, VlanId};
pub use vnic_profile::{PassThroughMode, VnicProfile, VnicProfileData, VnicProfileParams};
