// Copyright (c) 2025 - Cowboy AI, Inc.
//! Client configuration
//!
//! Retry defaults per operation class. Reads are cheap to repeat, so they
//! get more tries with a low backoff ceiling and a short deadline. Writes are
//! repeated less often and given more time, since a repeated write must be
//! safe on the engine side.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::retry::RetryStrategy;

/// Retry defaults for one operation class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryDefaults {
    /// Maximum attempts including the first one
    pub max_tries: u32,

    /// Delay after the first failure
    pub initial_backoff_ms: u64,

    /// Multiplier applied to the delay after each further failure
    #[serde(default = "default_backoff_factor")]
    pub backoff_factor: u32,

    /// Upper bound for a single delay
    pub backoff_ceiling_ms: u64,

    /// Wall-clock budget for the whole operation
    pub deadline_secs: u64,
}

fn default_backoff_factor() -> u32 {
    2
}

impl RetryDefaults {
    /// Defaults for list/get calls
    pub fn read() -> Self {
        Self {
            max_tries: 10,
            initial_backoff_ms: 100,
            backoff_factor: default_backoff_factor(),
            backoff_ceiling_ms: 5_000,
            deadline_secs: 60,
        }
    }

    /// Defaults for create/update/remove calls
    pub fn write() -> Self {
        Self {
            max_tries: 3,
            initial_backoff_ms: 1_000,
            backoff_factor: default_backoff_factor(),
            backoff_ceiling_ms: 30_000,
            deadline_secs: 300,
        }
    }

    /// Strategy list equivalent to these defaults
    pub fn strategies(&self) -> Vec<RetryStrategy> {
        vec![
            RetryStrategy::MaxTries(self.max_tries),
            RetryStrategy::ExponentialBackoff {
                initial: Duration::from_millis(self.initial_backoff_ms),
                factor: self.backoff_factor,
                ceiling: Duration::from_millis(self.backoff_ceiling_ms),
            },
            RetryStrategy::Deadline(Duration::from_secs(self.deadline_secs)),
        ]
    }
}

/// Retry defaults for both operation classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "RetryDefaults::read")]
    pub read: RetryDefaults,

    #[serde(default = "RetryDefaults::write")]
    pub write: RetryDefaults,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            read: RetryDefaults::read(),
            write: RetryDefaults::write(),
        }
    }
}

/// Configuration shared by every operation of a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub retry: RetryConfig,
}

impl ClientConfig {
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}
