// Copyright (c) 2025 - Cowboy AI, Inc.
//! Logger seam used by the retry executor

use std::fmt;

use tracing::Level;

/// Structured logger accepted by the retry executor.
///
/// `fields` carry the operation name, attempt number and outcome so that any
/// backend can render them as it sees fit.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: &str, fields: &[(&str, &dyn fmt::Display)]);
}

/// Forwards to the `tracing` macros under the `ovirt_client::retry` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str, fields: &[(&str, &dyn fmt::Display)]) {
        let fields = render_fields(fields);
        match level {
            Level::ERROR => tracing::error!(target: "ovirt_client::retry", %fields, "{}", message),
            Level::WARN => tracing::warn!(target: "ovirt_client::retry", %fields, "{}", message),
            Level::INFO => tracing::info!(target: "ovirt_client::retry", %fields, "{}", message),
            Level::DEBUG => tracing::debug!(target: "ovirt_client::retry", %fields, "{}", message),
            _ => tracing::trace!(target: "ovirt_client::retry", %fields, "{}", message),
        }
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: Level, _message: &str, _fields: &[(&str, &dyn fmt::Display)]) {}
}

fn render_fields(fields: &[(&str, &dyn fmt::Display)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}
