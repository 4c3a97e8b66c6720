// Copyright (c) 2025 - Cowboy AI, Inc.

//! oVirt engine REST transport
//!
//! Implements [`Transport`] over the engine's JSON API:
//!
//! ```text
//! Request { GET, ["networks", id] }  →  GET {url}/networks/{id}
//! Request { POST, ["networks"], body } →  POST {url}/networks  (JSON body)
//! ```
//!
//! Status codes are classified into the client error taxonomy so the retry
//! executor can decide what to repeat:
//!
//! - 404 → `NotFound`
//! - 400 → `BadArgument`
//! - 408, 504 → `Timeout`
//! - anything else unsuccessful → `RemoteFailure`
//!
//! # Example
//!
//! ```rust,no_run
//! use ovirt_client::wire::{HttpTransport, HttpTransportConfig};
//! use ovirt_client::{ClientConfig, LiveClient};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpTransportConfig {
//!     url: "https://engine.example.com/ovirt-engine/api".to_string(),
//!     token: "your-token-here".to_string(),
//!     ..Default::default()
//! };
//!
//! let client = LiveClient::new(HttpTransport::new(config)?, ClientConfig::default());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::{Method, Request, Transport, WireObject};
use crate::errors::{ClientError, ClientResult};

/// Configuration for the engine connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpTransportConfig {
    /// API root, e.g. "https://engine.example.com/ovirt-engine/api"
    pub url: String,

    /// Bearer token for the engine SSO
    pub token: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Accept invalid TLS certificates (lab engines with self-signed certs)
    #[serde(default)]
    pub insecure: bool,
}

fn default_timeout() -> u64 {
    120
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            url: "https://localhost/ovirt-engine/api".to_string(),
            token: String::new(),
            timeout_secs: default_timeout(),
            insecure: false,
        }
    }
}

/// Transport sending requests to the engine over HTTPS
pub struct HttpTransport {
    config: HttpTransportConfig,
    client: Client,
}

impl HttpTransport {
    /// Create a new transport; fails only on an unusable token or TLS setup
    pub fn new(config: HttpTransportConfig) -> ClientResult<Self> {
        info!("Configuring oVirt engine transport for {}", config.url);

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Authorization",
            format!("Bearer {}", config.token)
                .parse()
                .map_err(|e| ClientError::bad_argument(format!("invalid API token: {}", e)))?,
        );
        headers.insert(
            "Accept",
            "application/json"
                .parse()
                .map_err(|e| ClientError::wrap_bug("invalid header", e))?,
        );
        headers.insert(
            "Version",
            "4".parse()
                .map_err(|e| ClientError::wrap_bug("invalid header", e))?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.insecure)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::wrap_bug("failed to create HTTP client", e))?;

        Ok(Self { config, client })
    }

    fn url_for(&self, request: &Request) -> String {
        let path: Vec<String> = request
            .path
            .iter()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!("{}/{}", self.config.url.trim_end_matches('/'), path.join("/"))
    }
}

/// Classify an unsuccessful engine response
fn classify_status(status: StatusCode, request: &Request, body: &str) -> ClientError {
    let message = format!("{} returned {}: {}", request, status, body);
    match status {
        StatusCode::NOT_FOUND => ClientError::not_found(message),
        StatusCode::BAD_REQUEST => ClientError::bad_argument(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ClientError::timeout(message),
        _ => ClientError::remote(message),
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout {
                message: "engine request timed out".to_string(),
                source: Some(Box::new(err)),
            }
        } else {
            ClientError::wrap_remote("engine request failed", err)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> ClientResult<WireObject> {
        let url = self.url_for(&request);
        debug!("Sending {} to {}", request.method, url);

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(classify_status(status, &request, &text));
        }
        if text.trim().is_empty() {
            return Ok(WireObject::new());
        }

        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| ClientError::wrap_remote(format!("undecodable response to {}", request), e))?;
        WireObject::from_value(value)
            .ok_or_else(|| ClientError::remote(format!("response to {} is not a JSON object", request)))
    }
}
