// Copyright (c) 2025 - Cowboy AI, Inc.
//! Conversion contract: wire object → immutable domain value
//!
//! Every resource converts the same way:
//!
//! 1. read each mandatory field; the first absent one is `FieldMissing`
//! 2. read optional fields, substituting their documented default
//! 3. nested references (`"data_center": {"id": ...}`) follow the same rule,
//!    absence of the object or of its id is `FieldMissing` on the outer resource
//! 4. build the data and attach the shared client handle
//!
//! Mandatory reads always come first so a default can never mask an absence.

use crate::client::ClientRef;
use crate::errors::{ClientError, ClientResult};
use crate::wire::WireObject;

/// Data half of a domain object, built from a wire object
pub trait FromWire: Sized {
    /// Resource name used in error messages
    const RESOURCE: &'static str;

    fn from_wire(wire: &WireObject) -> ClientResult<Self>;
}

/// Domain object: converted data plus the client that produced it
pub trait Resource: Sized {
    type Data: FromWire;

    fn attach(data: Self::Data, client: ClientRef) -> Self;
}

/// Convert one wire object
pub fn convert<R: Resource>(wire: &WireObject, client: &ClientRef) -> ClientResult<R> {
    let data = R::Data::from_wire(wire)?;
    Ok(R::attach(data, client.clone()))
}

/// Convert every element of a listing; the first failure aborts the whole
/// listing with a `Bug` naming its index.
pub fn convert_list<R: Resource>(items: &[WireObject], client: &ClientRef) -> ClientResult<Vec<R>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            convert::<R>(item, client).map_err(|err| {
                ClientError::wrap_bug(
                    format!(
                        "failed to convert {} during listing item #{}",
                        R::Data::RESOURCE,
                        index
                    ),
                    err,
                )
            })
        })
        .collect()
}

/// Extract the elements of a listing response.
///
/// The engine omits empty collections entirely, so an absent key is an empty
/// listing. A key holding anything but an array is malformed.
pub fn collection(response: &WireObject, key: &str, context: &str) -> ClientResult<Vec<WireObject>> {
    if !response.contains(key) {
        return Ok(Vec::new());
    }
    response
        .list(key)
        .ok_or_else(|| ClientError::field_missing(context, key))
}

/// Field reader scoped to one resource, producing `FieldMissing` errors that
/// name the resource (and its id, once known).
pub struct Fields<'a> {
    wire: &'a WireObject,
    resource: String,
}

impl<'a> Fields<'a> {
    pub fn new(wire: &'a WireObject, resource: &str) -> Self {
        Self {
            wire,
            resource: resource.to_string(),
        }
    }

    /// Read the mandatory `id` and scope further errors to it
    pub fn id(&mut self) -> ClientResult<String> {
        let id = self.required_str("id")?;
        self.resource = format!("{} {}", self.resource, id);
        Ok(id)
    }

    pub fn required_str(&self, field: &str) -> ClientResult<String> {
        self.wire
            .string(field)
            .map(str::to_string)
            .ok_or_else(|| self.missing(field))
    }

    /// Id of a nested reference such as `"host": {"id": "..."}`
    pub fn required_ref(&self, field: &str) -> ClientResult<String> {
        self.wire
            .object(field)
            .and_then(|nested| nested.string("id").map(str::to_string))
            .ok_or_else(|| self.missing(&format!("{}.id", field)))
    }

    /// Optional string, empty when absent
    pub fn optional_str(&self, field: &str) -> String {
        self.wire.string(field).unwrap_or_default().to_string()
    }

    pub fn optional_bool(&self, field: &str) -> bool {
        self.wire.bool(field).unwrap_or(false)
    }

    /// Optional scalar nested in an object, e.g. `"vlan": {"id": "100"}`
    pub fn optional_nested_i64(&self, field: &str, nested: &str) -> Option<i64> {
        self.wire.object(field).and_then(|object| object.i64(nested))
    }

    pub fn optional_nested_str(&self, field: &str, nested: &str) -> Option<String> {
        self.wire
            .object(field)
            .and_then(|object| object.string(nested).map(str::to_string))
    }

    pub fn optional_i64(&self, field: &str) -> Option<i64> {
        self.wire.i64(field)
    }

    /// A present value that violates a domain invariant
    pub fn invalid(&self, field: &str, cause: impl Into<crate::errors::BoxedCause>) -> ClientError {
        ClientError::wrap_bug(format!("{} has an invalid {}", self.resource, field), cause)
    }

    fn missing(&self, field: &str) -> ClientError {
        ClientError::field_missing(self.resource.clone(), field)
    }
}
