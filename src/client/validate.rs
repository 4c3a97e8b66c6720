// Copyright (c) 2025 - Cowboy AI, Inc.
//! Argument checks shared by the live and mock clients
//!
//! Every check runs before any remote interaction and fails with
//! `BadArgument`.

use crate::errors::{ClientError, ClientResult};

/// A resource name must not be empty
pub fn name(resource: &str, name: &str) -> ClientResult<()> {
    if name.is_empty() {
        return Err(ClientError::bad_argument(format!("{} name cannot be empty", resource)));
    }
    Ok(())
}

/// An identifier must not be empty
pub fn id(what: &str, id: impl AsRef<str>) -> ClientResult<()> {
    if id.as_ref().is_empty() {
        return Err(ClientError::bad_argument(format!("{} ID cannot be empty", what)));
    }
    Ok(())
}

/// Network creation: the name is checked before the datacenter
pub fn network_creation(name: &str, datacenter: impl AsRef<str>) -> ClientResult<()> {
    self::name("network", name)?;
    id("datacenter", datacenter)
}
