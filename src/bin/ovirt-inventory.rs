// Copyright (c) 2025 - Cowboy AI, Inc.
//! oVirt Inventory
//!
//! Walks the engine's network inventory and prints it:
//! datacenters → clusters (with assigned networks) → hosts (with NICs and
//! network attachments), followed by logical networks and VNIC profiles.
//!
//! Run with: cargo run --bin ovirt-inventory --features http
//!
//! Environment:
//! 1. OVIRT_URL - API root (default: https://localhost/ovirt-engine/api)
//! 2. OVIRT_TOKEN - bearer token (required)
//! 3. OVIRT_TIMEOUT_SECS - per-request timeout (default: 120)
//! 4. OVIRT_INSECURE - accept self-signed certificates when "true"

use anyhow::{Context, Result};
use ovirt_client::client::{
    ClusterClient, ClusterNetworkClient, DatacenterClient, HostClient, HostNicClient,
    NetworkAttachmentClient, NetworkClient, VnicProfileClient,
};
use ovirt_client::wire::{HttpTransport, HttpTransportConfig};
use ovirt_client::{ClientConfig, LiveClient, Retries};
use tracing::{info, warn};

/// Load the transport configuration from environment variables
fn transport_config_from_env() -> Result<HttpTransportConfig> {
    let defaults = HttpTransportConfig::default();

    let url = std::env::var("OVIRT_URL").unwrap_or(defaults.url);
    let token = std::env::var("OVIRT_TOKEN").context("OVIRT_TOKEN not set")?;
    let timeout_secs = match std::env::var("OVIRT_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("OVIRT_TIMEOUT_SECS is not a number: {}", raw))?,
        Err(_) => defaults.timeout_secs,
    };
    let insecure = std::env::var("OVIRT_INSECURE")
        .map(|raw| raw.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    Ok(HttpTransportConfig {
        url,
        token,
        timeout_secs,
        insecure,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let transport_config = transport_config_from_env()?;
    info!("Engine URL: {}", transport_config.url);
    if transport_config.insecure {
        warn!("TLS certificate verification is disabled");
    }

    let transport = HttpTransport::new(transport_config).context("Failed to create engine transport")?;
    let client = LiveClient::new(transport, ClientConfig::default());

    for datacenter in client
        .list_datacenters(Retries::default())
        .await
        .context("Failed to list datacenters")?
    {
        println!("datacenter {} ({})", datacenter.name, datacenter.id);
    }

    for cluster in client
        .list_clusters(Retries::default())
        .await
        .context("Failed to list clusters")?
    {
        println!("cluster {} ({}) in datacenter {}", cluster.name, cluster.id, cluster.datacenter_id);
        let networks = client
            .list_cluster_networks(&cluster.id, Retries::default())
            .await
            .with_context(|| format!("Failed to list networks of cluster {}", cluster.id))?;
        for assignment in networks {
            let marker = if assignment.required { " (required)" } else { "" };
            println!("  network {}{}", assignment.network_id, marker);
        }
    }

    for host in client.list_hosts(Retries::default()).await.context("Failed to list hosts")? {
        println!("host {} ({}) {} {}", host.name, host.id, host.address, host.status);

        let nics = client
            .list_host_nics(&host.id, Retries::default())
            .await
            .with_context(|| format!("Failed to list NICs of host {}", host.id))?;
        for nic in nics {
            let mac = nic.mac.map(|mac| mac.to_string()).unwrap_or_else(|| "-".to_string());
            println!("  nic {} ({}) mac {} mtu {}", nic.name, nic.id, mac, nic.mtu);
        }

        let attachments = client
            .list_network_attachments(&host.id, Retries::default())
            .await
            .with_context(|| format!("Failed to list network attachments of host {}", host.id))?;
        for attachment in attachments {
            println!(
                "  attachment {}: network {} on nic {}",
                attachment.id, attachment.network_id, attachment.host_nic_id
            );
        }
    }

    for network in client
        .list_networks(Retries::default())
        .await
        .context("Failed to list networks")?
    {
        let vlan = network.vlan.map(|vlan| vlan.to_string()).unwrap_or_else(|| "untagged".to_string());
        println!("network {} ({}) vlan {}", network.name, network.id, vlan);
    }

    for profile in client
        .list_vnic_profiles(Retries::default())
        .await
        .context("Failed to list VNIC profiles")?
    {
        println!(
            "vnic profile {} ({}) on network {} pass-through {}",
            profile.name, profile.id, profile.network_id, profile.pass_through
        );
    }

    info!("Inventory complete");
    Ok(())
}
