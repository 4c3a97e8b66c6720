// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fake engine serving REST paths from a mock client
//!
//! Lets the live client run against real state: requests are routed to a
//! [`MockClient`] and its answers are encoded the way the engine would send
//! them. Contract tests use it to drive the live and the mock client through
//! the same scenarios.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use ovirt_client::client::{
    ClusterClient, ClusterNetworkClient, DatacenterClient, HostClient, HostNicClient,
    NetworkAttachmentClient, NetworkClient, VnicProfileClient,
};
use ovirt_client::domain::{
    ClusterData, ClusterNetworkData, DatacenterData, HostData, HostNicData, NetworkAttachmentData,
    NetworkAttachmentParams, NetworkData, NetworkParams, PassThroughMode, VlanId, VnicProfileData,
    VnicProfileParams,
};
use ovirt_client::errors::{ClientError, ClientResult};
use ovirt_client::retry::{NoopLogger, Retries};
use ovirt_client::wire::{Method, Request, Transport, WireObject};
use ovirt_client::{ClientConfig, LiveClient, MockClient};

pub fn encode_datacenter(data: &DatacenterData) -> WireObject {
    WireObject::new()
        .with("id", data.id.as_str())
        .with("name", data.name.as_str())
        .with("comment", data.comment.as_str())
        .with("description", data.description.as_str())
}

pub fn encode_cluster(data: &ClusterData) -> WireObject {
    WireObject::new()
        .with("id", data.id.as_str())
        .with("name", data.name.as_str())
        .with("comment", data.comment.as_str())
        .with("description", data.description.as_str())
        .with_ref("data_center", data.datacenter_id.as_str())
}

pub fn encode_host(data: &HostData) -> WireObject {
    WireObject::new()
        .with("id", data.id.as_str())
        .with("name", data.name.as_str())
        .with("address", data.address.as_str())
        .with("status", data.status.as_str())
        .with_ref("cluster", data.cluster_id.as_str())
}

pub fn encode_host_nic(data: &HostNicData) -> WireObject {
    let wire = WireObject::new()
        .with("id", data.id.as_str())
        .with("name", data.name.as_str())
        .with("mtu", data.mtu.to_string())
        .with_ref("host", data.host_id.as_str());
    match data.mac {
        Some(mac) => wire.with("mac", WireObject::new().with("address", mac.to_string())),
        None => wire,
    }
}

pub fn encode_network(data: &NetworkData) -> WireObject {
    let wire = WireObject::new()
        .with("id", data.id.as_str())
        .with("name", data.name.as_str())
        .with("description", data.description.as_str())
        .with("comment", data.comment.as_str())
        .with_ref("data_center", data.datacenter_id.as_str());
    match data.vlan {
        Some(vlan) => wire.with("vlan", WireObject::new().with("id", vlan.value().to_string())),
        None => wire,
    }
}

pub fn encode_cluster_network(data: &ClusterNetworkData) -> WireObject {
    WireObject::new()
        .with("id", data.network_id.as_str())
        .with("required", data.required.to_string())
        .with_ref("cluster", data.cluster_id.as_str())
}

pub fn encode_attachment(data: &NetworkAttachmentData) -> WireObject {
    WireObject::new()
        .with("id", data.id.as_str())
        .with("comment", data.comment.as_str())
        .with("description", data.description.as_str())
        .with_ref("host", data.host_id.as_str())
        .with_ref("network", data.network_id.as_str())
        .with_ref("host_nic", data.host_nic_id.as_str())
}

pub fn encode_vnic_profile(data: &VnicProfileData) -> WireObject {
    WireObject::new()
        .with("id", data.id.as_str())
        .with("name", data.name.as_str())
        .with("comment", data.comment.as_str())
        .with("description", data.description.as_str())
        .with("pass_through", WireObject::new().with("mode", data.pass_through.as_str()))
        .with("port_mirroring", data.port_mirroring.to_string())
        .with_ref("network", data.network_id.as_str())
}

fn collection<T>(key: &str, items: Vec<T>, encode: impl Fn(&T) -> WireObject) -> WireObject {
    // The engine omits empty collections.
    if items.is_empty() {
        return WireObject::new();
    }
    let values: Vec<Value> = items.iter().map(|item| encode(item).into_value()).collect();
    WireObject::new().with(key, values)
}

fn text(body: &WireObject, field: &str) -> String {
    body.string(field).unwrap_or_default().to_string()
}

fn reference(body: &WireObject, field: &str) -> String {
    body.object(field)
        .and_then(|nested| nested.string("id").map(str::to_string))
        .unwrap_or_default()
}

fn network_params(body: &WireObject) -> ClientResult<NetworkParams> {
    let mut params = NetworkParams::new()
        .with_description(text(body, "description"))
        .with_comment(text(body, "comment"));
    if let Some(id) = body.object("vlan").and_then(|vlan| vlan.i64("id")) {
        let vlan = VlanId::new(id).map_err(|e| ClientError::bad_argument(e.to_string()))?;
        params = params.with_vlan(vlan);
    }
    Ok(params)
}

fn profile_params(body: &WireObject) -> VnicProfileParams {
    let mode = match body.object("pass_through").and_then(|p| p.string("mode").map(str::to_string)) {
        Some(mode) if mode == "enabled" => PassThroughMode::Enabled,
        _ => PassThroughMode::Disabled,
    };
    VnicProfileParams::new()
        .with_comment(text(body, "comment"))
        .with_description(text(body, "description"))
        .with_pass_through(mode)
        .with_port_mirroring(body.bool("port_mirroring").unwrap_or(false))
}

fn attachment_params(body: &WireObject) -> NetworkAttachmentParams {
    NetworkAttachmentParams::new()
        .with_comment(text(body, "comment"))
        .with_description(text(body, "description"))
}

/// Transport answering like an engine whose state lives in a [`MockClient`]
#[derive(Clone)]
pub struct EngineTransport {
    engine: MockClient,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl EngineTransport {
    pub fn new(engine: MockClient) -> Self {
        Self {
            engine,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    async fn route(&self, request: &Request) -> ClientResult<WireObject> {
        let engine = &self.engine;
        let any = Retries::default;
        let path: Vec<&str> = request.path.iter().map(String::as_str).collect();
        let empty = WireObject::new();
        let body = request.body.as_ref().unwrap_or(&empty);

        let wire = match (request.method, path.as_slice()) {
            (Method::Get, ["datacenters"]) => {
                let items = engine.list_datacenters(any()).await?;
                collection("data_center", items, |d| encode_datacenter(d))
            }
            (Method::Get, ["datacenters", id]) => {
                encode_datacenter(&engine.get_datacenter(&(*id).into(), any()).await?.data())
            }
            (Method::Get, ["clusters"]) => {
                let items = engine.list_clusters(any()).await?;
                collection("cluster", items, |c| encode_cluster(c))
            }
            (Method::Get, ["clusters", id]) => encode_cluster(&engine.get_cluster(&(*id).into(), any()).await?.data()),
            (Method::Get, ["hosts"]) => {
                let items = engine.list_hosts(any()).await?;
                collection("host", items, |h| encode_host(h))
            }
            (Method::Get, ["hosts", id]) => encode_host(&engine.get_host(&(*id).into(), any()).await?.data()),
            (Method::Get, ["hosts", host, "nics"]) => {
                let items = engine.list_host_nics(&(*host).into(), any()).await?;
                collection("host_nic", items, |n| encode_host_nic(n))
            }
            (Method::Get, ["hosts", host, "nics", nic]) => {
                encode_host_nic(&engine.get_host_nic(&(*host).into(), &(*nic).into(), any()).await?.data())
            }
            (Method::Get, ["networks"]) => {
                let items = engine.list_networks(any()).await?;
                collection("network", items, |n| encode_network(n))
            }
            (Method::Get, ["networks", id]) => encode_network(&engine.get_network(&(*id).into(), any()).await?.data()),
            (Method::Post, ["networks"]) => {
                let datacenter = reference(body, "data_center");
                let network = engine
                    .create_network(&datacenter.into(), &text(body, "name"), network_params(body)?, any())
                    .await?;
                encode_network(&network)
            }
            (Method::Put, ["networks", id]) => {
                let network = engine
                    .update_network(&(*id).into(), &text(body, "name"), network_params(body)?, any())
                    .await?;
                encode_network(&network)
            }
            (Method::Delete, ["networks", id]) => {
                engine.remove_network(&(*id).into(), any()).await?;
                WireObject::new()
            }
            (Method::Get, ["clusters", cluster, "networks"]) => {
                let items = engine.list_cluster_networks(&(*cluster).into(), any()).await?;
                collection("network", items, |n| encode_cluster_network(n))
            }
            (Method::Get, ["clusters", cluster, "networks", network]) => encode_cluster_network(
                &engine
                    .get_cluster_network(&(*cluster).into(), &(*network).into(), any())
                    .await?.data(),
            ),
            (Method::Post, ["clusters", cluster, "networks"]) => {
                let network = text(body, "id");
                let required = body.bool("required").unwrap_or(false);
                encode_cluster_network(
                    &engine
                        .create_cluster_network(&(*cluster).into(), &network.into(), required, any())
                        .await?.data(),
                )
            }
            (Method::Put, ["clusters", cluster, "networks", network]) => {
                let required = body.bool("required").unwrap_or(false);
                encode_cluster_network(
                    &engine
                        .update_cluster_network(&(*cluster).into(), &(*network).into(), required, any())
                        .await?.data(),
                )
            }
            (Method::Delete, ["clusters", cluster, "networks", network]) => {
                engine
                    .remove_cluster_network(&(*cluster).into(), &(*network).into(), any())
                    .await?;
                WireObject::new()
            }
            (Method::Get, ["hosts", host, "networkattachments"]) => {
                let items = engine.list_network_attachments(&(*host).into(), any()).await?;
                collection("network_attachment", items, |a| encode_attachment(a))
            }
            (Method::Get, ["hosts", host, "networkattachments", id]) => encode_attachment(
                &engine
                    .get_network_attachment(&(*host).into(), &(*id).into(), any())
                    .await?.data(),
            ),
            (Method::Post, ["hosts", host, "networkattachments"]) => {
                let network = reference(body, "network");
                let nic = reference(body, "host_nic");
                encode_attachment(
                    &engine
                        .create_network_attachment(
                            &(*host).into(),
                            &network.into(),
                            &nic.into(),
                            attachment_params(body),
                            any(),
                        )
                        .await?.data(),
                )
            }
            (Method::Put, ["hosts", host, "networkattachments", id]) => encode_attachment(
                &engine
                    .update_network_attachment(&(*host).into(), &(*id).into(), attachment_params(body), any())
                    .await?.data(),
            ),
            (Method::Delete, ["hosts", host, "networkattachments", id]) => {
                engine
                    .remove_network_attachment(&(*host).into(), &(*id).into(), any())
                    .await?;
                WireObject::new()
            }
            (Method::Post, ["hosts", host, "commitnetconfig"]) => {
                engine.get_host(&(*host).into(), any()).await?;
                WireObject::new()
            }
            (Method::Get, ["vnicprofiles"]) => {
                let items = engine.list_vnic_profiles(any()).await?;
                collection("vnic_profile", items, |p| encode_vnic_profile(p))
            }
            (Method::Get, ["vnicprofiles", id]) => {
                encode_vnic_profile(&engine.get_vnic_profile(&(*id).into(), any()).await?.data())
            }
            (Method::Post, ["vnicprofiles"]) => {
                let network = reference(body, "network");
                encode_vnic_profile(
                    &engine
                        .create_vnic_profile(&text(body, "name"), &network.into(), profile_params(body), any())
                        .await?.data(),
                )
            }
            (Method::Put, ["vnicprofiles", id]) => encode_vnic_profile(
                &engine
                    .update_vnic_profile(&(*id).into(), &text(body, "name"), profile_params(body), any())
                    .await?.data(),
            ),
            (Method::Delete, ["vnicprofiles", id]) => {
                engine.remove_vnic_profile(&(*id).into(), any()).await?;
                WireObject::new()
            }
            _ => return Err(ClientError::not_found(format!("no route for {}", request))),
        };

        Ok(wire)
    }
}

#[async_trait]
impl Transport for EngineTransport {
    async fn send(&self, request: Request) -> ClientResult<WireObject> {
        self.requests.lock().unwrap().push(request.clone());
        self.route(&request).await
    }
}

/// A live client talking to a fresh fake engine, plus the engine itself
pub fn live_against_engine() -> (LiveClient, MockClient, EngineTransport) {
    let engine = MockClient::new();
    let transport = EngineTransport::new(engine.clone());
    let client = LiveClient::with_logger(transport.clone(), ClientConfig::default(), NoopLogger);
    (client, engine, transport)
}
