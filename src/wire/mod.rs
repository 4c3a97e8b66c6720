// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire layer: loosely-typed engine records and the transport seam
//!
//! The engine speaks JSON. A [`WireObject`] is one JSON object as received;
//! every field read returns an `Option` so that absence stays observable
//! instead of collapsing into a default.
//!
//! ```text
//! LiveClient ──Request──> Transport ──WireObject──> convert ──> Network
//! ```
//!
//! The engine encodes scalars as strings (`"vlan": {"id": "100"}`,
//! `"required": "true"`). The scalar readers accept both that form and
//! native JSON numbers and booleans.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{HttpTransport, HttpTransportConfig};

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ClientResult;

/// One JSON object received from (or sent to) the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireObject(Map<String, Value>);

impl WireObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an arbitrary JSON value; anything but an object is `None`
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Raw field access
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// String field; a present non-string value reads as absent
    pub fn string(&self, name: &str) -> Option<&str> {
        self.field(name)?.as_str()
    }

    /// Boolean field, accepting `true` and `"true"`
    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.field(name)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Integer field, accepting `100` and `"100"`
    pub fn i64(&self, name: &str) -> Option<i64> {
        match self.field(name)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Nested object field
    pub fn object(&self, name: &str) -> Option<WireObject> {
        match self.field(name)? {
            Value::Object(map) => Some(WireObject(map.clone())),
            _ => None,
        }
    }

    /// Array field. Elements that are not objects are kept as empty objects
    /// so that conversion reports them by index instead of silently dropping them.
    pub fn list(&self, name: &str) -> Option<Vec<WireObject>> {
        match self.field(name)? {
            Value::Array(items) => Some(
                items
                    .iter()
                    .map(|item| WireObject::from_value(item.clone()).unwrap_or_default())
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Set a field, returning `self` for chaining
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    /// Set a nested `{"id": ...}` reference
    pub fn with_ref(self, name: &str, id: &str) -> Self {
        self.with(name, WireObject::new().with("id", id))
    }

    /// Remove a field, returning `self`
    pub fn without(mut self, name: &str) -> Self {
        self.0.remove(name);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<WireObject> for Value {
    fn from(wire: WireObject) -> Self {
        wire.into_value()
    }
}

/// HTTP-like verb of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

/// One call against a resource sub-path of the engine API
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Unencoded path segments below the API root, e.g. `["hosts", id, "nics"]`
    pub path: Vec<String>,
    pub body: Option<WireObject>,
}

impl Request {
    pub fn new<I, S>(method: Method, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            path: path.into_iter().map(Into::into).collect(),
            body: None,
        }
    }

    pub fn get<I: IntoIterator<Item = S>, S: Into<String>>(path: I) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post<I: IntoIterator<Item = S>, S: Into<String>>(path: I, body: WireObject) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    pub fn put<I: IntoIterator<Item = S>, S: Into<String>>(path: I, body: WireObject) -> Self {
        Self::new(Method::Put, path).with_body(body)
    }

    pub fn delete<I: IntoIterator<Item = S>, S: Into<String>>(path: I) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_body(mut self, body: WireObject) -> Self {
        self.body = Some(body);
        self
    }

    /// Path joined with `/`, unencoded
    pub fn path_string(&self) -> String {
        self.path.join("/")
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path_string())
    }
}

/// The remote endpoint collaborator.
///
/// Implementations own authentication, connection handling and encoding, and
/// classify their failures into the client error taxonomy (`NotFound`,
/// `Timeout`, `RemoteFailure`, ...). Calls with no response body return an
/// empty [`WireObject`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> ClientResult<WireObject>;
}
