// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for ovirt-client
//!
//! - [`ScriptedTransport`] replays queued replies and records every request
//! - [`RecordingLogger`] keeps every retry log line
//! - wire builders produce engine-shaped JSON with fixed identifiers
//! - [`engine::EngineTransport`] serves the REST paths from a mock engine
//!
//! All identifiers are fixed constants so failures are reproducible.
#![allow(dead_code)]

pub mod engine;

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tokio::time::Instant;
use tracing::Level;

use ovirt_client::errors::{ClientError, ClientResult, ErrorKind};
use ovirt_client::retry::{Logger, NoopLogger};
use ovirt_client::wire::{Request, Transport, WireObject};
use ovirt_client::{ClientConfig, LiveClient};

pub const DATACENTER_ID: &str = "00000000-0000-4000-8000-00000000dc01";
pub const CLUSTER_ID: &str = "00000000-0000-4000-8000-0000000c1001";
pub const HOST_ID: &str = "00000000-0000-4000-8000-00000000h001";
pub const HOST_NIC_ID: &str = "00000000-0000-4000-8000-0000000n1c01";
pub const NETWORK_ID: &str = "00000000-0000-4000-8000-00000000ne01";
pub const ATTACHMENT_ID: &str = "00000000-0000-4000-8000-00000000a001";
pub const VNIC_PROFILE_ID: &str = "00000000-0000-4000-8000-00000000vp01";

/// One scripted transport reply
#[derive(Debug, Clone)]
pub enum Reply {
    Wire(WireObject),
    Fail(ErrorKind, String),
}

impl Reply {
    fn produce(&self) -> ClientResult<WireObject> {
        match self {
            Reply::Wire(wire) => Ok(wire.clone()),
            Reply::Fail(kind, message) => Err(error_of(*kind, message)),
        }
    }
}

/// Build an error of the given kind
pub fn error_of(kind: ErrorKind, message: &str) -> ClientError {
    match kind {
        ErrorKind::FieldMissing => ClientError::field_missing(message, "id"),
        ErrorKind::BadArgument => ClientError::bad_argument(message),
        ErrorKind::Bug => ClientError::bug(message),
        ErrorKind::Timeout => ClientError::timeout(message),
        ErrorKind::NotFound => ClientError::not_found(message),
        ErrorKind::RemoteFailure => ClientError::remote(message),
    }
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Reply>,
    fallback: Option<Reply>,
    requests: Vec<Request>,
    sent_at: Vec<Instant>,
}

/// Transport replaying queued replies in order.
///
/// Once the queue is drained the fallback reply is used; without one an
/// unscripted request fails as `Bug` so that it is never retried.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, wire: WireObject) -> Self {
        self.script.lock().unwrap().replies.push_back(Reply::Wire(wire));
        self
    }

    pub fn fail(self, kind: ErrorKind, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .replies
            .push_back(Reply::Fail(kind, message.to_string()));
        self
    }

    /// Reply used for every request once the queue is empty
    pub fn otherwise(self, reply: Reply) -> Self {
        self.script.lock().unwrap().fallback = Some(reply);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.script.lock().unwrap().requests.len()
    }

    /// Time between consecutive requests, on the tokio clock
    pub fn gaps(&self) -> Vec<Duration> {
        self.script
            .lock()
            .unwrap()
            .sent_at
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: Request) -> ClientResult<WireObject> {
        let mut script = self.script.lock().unwrap();
        let description = request.to_string();
        script.requests.push(request);
        script.sent_at.push(Instant::now());

        match script.replies.pop_front().or_else(|| script.fallback.clone()) {
            Some(reply) => reply.produce(),
            None => Err(ClientError::bug(format!("unscripted request {}", description))),
        }
    }
}

/// Logger keeping every record for later inspection
#[derive(Clone, Default)]
pub struct RecordingLogger {
    records: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingLogger {
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().unwrap().clone()
    }

    pub fn count(&self, level: Level) -> usize {
        self.records().iter().filter(|(l, _)| *l == level).count()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: &str, _fields: &[(&str, &dyn fmt::Display)]) {
        self.records.lock().unwrap().push((level, message.to_string()));
    }
}

/// Live client over a scripted transport with default retry classes
pub fn live_client(transport: &ScriptedTransport) -> LiveClient {
    LiveClient::with_logger(transport.clone(), ClientConfig::default(), NoopLogger)
}

pub fn wire(value: serde_json::Value) -> WireObject {
    WireObject::from_value(value).expect("fixture must be a JSON object")
}

pub fn datacenter_wire(id: &str) -> WireObject {
    wire(json!({
        "id": id,
        "name": "Default",
        "description": "The default Data Center"
    }))
}

pub fn cluster_wire(id: &str, datacenter: &str) -> WireObject {
    wire(json!({
        "id": id,
        "name": "Default",
        "data_center": { "id": datacenter }
    }))
}

pub fn host_wire(id: &str, cluster: &str) -> WireObject {
    wire(json!({
        "id": id,
        "name": "node01",
        "address": "192.0.2.10",
        "status": "up",
        "cluster": { "id": cluster }
    }))
}

pub fn host_nic_wire(id: &str, host: &str) -> WireObject {
    wire(json!({
        "id": id,
        "name": "eth0",
        "host": { "id": host },
        "mac": { "address": "56:6f:1a:2b:00:01" },
        "mtu": "1500"
    }))
}

pub fn network_wire(id: &str, datacenter: &str) -> WireObject {
    wire(json!({
        "id": id,
        "name": "storage",
        "description": "storage backbone",
        "data_center": { "id": datacenter },
        "vlan": { "id": "120" }
    }))
}

pub fn cluster_network_wire(network: &str, cluster: &str) -> WireObject {
    wire(json!({
        "id": network,
        "name": "storage",
        "cluster": { "id": cluster },
        "required": "true"
    }))
}

pub fn attachment_wire(id: &str, host: &str, network: &str, nic: &str) -> WireObject {
    wire(json!({
        "id": id,
        "host": { "id": host },
        "network": { "id": network },
        "host_nic": { "id": nic }
    }))
}

pub fn vnic_profile_wire(id: &str, network: &str) -> WireObject {
    wire(json!({
        "id": id,
        "name": "storage",
        "network": { "id": network },
        "pass_through": { "mode": "disabled" },
        "port_mirroring": "false"
    }))
}

/// Listing response holding `items` under `key`
pub fn listing(key: &str, items: Vec<WireObject>) -> WireObject {
    let items: Vec<serde_json::Value> = items.into_iter().map(WireObject::into_value).collect();
    WireObject::new().with(key, items)
}
