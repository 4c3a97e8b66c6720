// Copyright (c) 2025 - Cowboy AI, Inc.
//! Live client: engine access through a [`Transport`]
//!
//! # Architecture
//!
//! ```text
//! operation ──validate──> retry(strategies) ──> Transport::send ──> convert
//!                              ^                                     │
//!                              └──── retryable error (Timeout, ──────┘
//!                                    RemoteFailure)
//! ```
//!
//! List and get calls resolve their strategies against the read defaults;
//! create, update and remove calls against the write defaults. Conversion
//! runs inside the retried unit, so a malformed response aborts immediately
//! as `FieldMissing` or `Bug`.
//!
//! | Resource | Path |
//! |---|---|
//! | datacenters | `datacenters`, `datacenters/{id}` |
//! | clusters | `clusters`, `clusters/{id}` |
//! | hosts | `hosts`, `hosts/{id}` |
//! | host NICs | `hosts/{id}/nics/{nic}` |
//! | networks | `networks/{id}` |
//! | cluster networks | `clusters/{id}/networks/{network}` |
//! | network attachments | `hosts/{id}/networkattachments/{id}` |
//! | VNIC profiles | `vnicprofiles/{id}` |

mod cluster_network;
mod inventory;
mod network;
mod network_attachment;
mod vnic_profile;

use std::sync::Arc;

use tracing::{debug, info};

use super::ClientRef;
use crate::config::{ClientConfig, RetryDefaults};
use crate::domain::convert::{collection, convert, convert_list, FromWire, Resource};
use crate::errors::ClientResult;
use crate::retry::{retry, Logger, Retries, TracingLogger};
use crate::wire::{Request, Transport, WireObject};

/// Engine client over a [`Transport`].
///
/// Cloning is cheap: clones share the transport, configuration and logger.
#[derive(Clone)]
pub struct LiveClient {
    inner: Arc<LiveInner>,
}

struct LiveInner {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
    logger: Arc<dyn Logger>,
}

/// Operation class deciding which retry defaults apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Read,
    Write,
}

impl LiveClient {
    /// Create a client logging retries through `tracing`
    pub fn new(transport: impl Transport + 'static, config: ClientConfig) -> Self {
        Self::with_logger(transport, config, TracingLogger)
    }

    pub fn with_logger(
        transport: impl Transport + 'static,
        config: ClientConfig,
        logger: impl Logger + 'static,
    ) -> Self {
        info!(
            read_max_tries = config.retry.read.max_tries,
            write_max_tries = config.retry.write.max_tries,
            "Created engine client"
        );

        Self {
            inner: Arc::new(LiveInner {
                transport: Arc::new(transport),
                config,
                logger: Arc::new(logger),
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Handle attached to every domain object this client returns
    pub fn handle(&self) -> ClientRef {
        ClientRef::new(self.clone())
    }

    fn defaults(&self, class: Class) -> &RetryDefaults {
        match class {
            Class::Read => &self.inner.config.retry.read,
            Class::Write => &self.inner.config.retry.write,
        }
    }

    /// Send `request` under the resolved strategies and decode the response
    async fn execute<T, D>(
        &self,
        operation: &str,
        class: Class,
        retries: Retries,
        request: Request,
        decode: D,
    ) -> ClientResult<T>
    where
        D: Fn(&WireObject, &ClientRef) -> ClientResult<T> + Sync,
    {
        let strategies = retries.resolve(self.defaults(class));
        let client = self.handle();
        let decode = &decode;

        retry(operation, self.inner.logger.as_ref(), &strategies, || {
            let transport = Arc::clone(&self.inner.transport);
            let request = request.clone();
            let client = client.clone();
            async move {
                debug!(request = %request, "Sending request to engine");
                let response = transport.send(request).await?;
                decode(&response, &client)
            }
        })
        .await
    }

    /// Read one resource
    async fn fetch<R: Resource>(&self, operation: &str, retries: Retries, request: Request) -> ClientResult<R> {
        self.execute(operation, Class::Read, retries, request, |wire, client| {
            convert::<R>(wire, client)
        })
        .await
    }

    /// Read a listing stored under `key` in the response
    async fn fetch_list<R: Resource>(
        &self,
        operation: &str,
        retries: Retries,
        request: Request,
        key: &str,
    ) -> ClientResult<Vec<R>> {
        let context = format!("{} listing", <R::Data as FromWire>::RESOURCE);
        self.execute(operation, Class::Read, retries, request, |wire, client| {
            let items = collection(wire, key, &context)?;
            convert_list::<R>(&items, client)
        })
        .await
    }

    /// Create or update one resource, returning its new state
    async fn store<R: Resource>(&self, operation: &str, retries: Retries, request: Request) -> ClientResult<R> {
        self.execute(operation, Class::Write, retries, request, |wire, client| {
            convert::<R>(wire, client)
        })
        .await
    }

    /// Write whose response carries nothing of interest
    async fn discard(&self, operation: &str, retries: Retries, request: Request) -> ClientResult<()> {
        self.execute(operation, Class::Write, retries, request, |_, _| Ok(()))
            .await
    }
}

impl std::fmt::Debug for LiveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
