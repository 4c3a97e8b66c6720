// Copyright (c) 2025 - Cowboy AI, Inc.
//! Typed resource identifiers
//!
//! The engine uses plain string UUIDs for everything. Each resource gets its
//! own newtype so a `HostId` can never be passed where a `NetworkId` is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Fresh random identifier, as the engine would assign
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

resource_id!(
    /// Identifier of a datacenter
    DatacenterId
);
resource_id!(
    /// Identifier of a cluster
    ClusterId
);
resource_id!(
    /// Identifier of a host
    HostId
);
resource_id!(
    /// Identifier of a physical NIC on a host
    HostNicId
);
resource_id!(
    /// Identifier of a logical network
    NetworkId
);
resource_id!(
    /// Identifier of a network attachment on a host
    NetworkAttachmentId
);
resource_id!(
    /// Identifier of a VNIC profile
    VnicProfileId
);
