// Copyright (c) 2025 - Cowboy AI, Inc.
//! Typed, retrying client for the oVirt engine
//!
//! This crate exposes datacenters, clusters, hosts, host NICs, logical
//! networks, cluster networks, network attachments and VNIC profiles as
//! immutable domain values, and wraps every remote call in a configurable
//! retry policy.
//!
//! # Layers
//!
//! - [`wire`] - loosely-typed engine records and the [`Transport`](wire::Transport) seam
//! - [`retry`] - strategies, executor and logger
//! - [`domain`] - typed resources and the wire conversion contract
//! - [`client`] - resource traits with a live and a mock implementation
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "http")]
//! # async fn run() -> Result<(), ovirt_client::ClientError> {
//! use ovirt_client::client::{HostClient, HostNicClient};
//! use ovirt_client::wire::{HttpTransport, HttpTransportConfig};
//! use ovirt_client::{ClientConfig, LiveClient, Retries};
//!
//! let transport = HttpTransport::new(HttpTransportConfig {
//!     url: "https://engine.example.com/ovirt-engine/api".to_string(),
//!     token: "token".to_string(),
//!     ..Default::default()
//! })?;
//! let client = LiveClient::new(transport, ClientConfig::default());
//!
//! for host in client.list_hosts(Retries::default()).await? {
//!     let nics = client.list_host_nics(&host.id, Retries::new().max_tries(2)).await?;
//!     println!("{} has {} NICs", host.name, nics.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod retry;
pub mod wire;

// Re-export commonly used types
pub use client::{Client, ClientRef, LiveClient, MockClient};
pub use config::{ClientConfig, RetryConfig, RetryDefaults};
pub use errors::{ClientError, ClientResult, ErrorKind};
pub use retry::{Retries, RetryStrategy};
