// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resilient execution of remote calls
//!
//! Every remote call made by [`LiveClient`](crate::client::LiveClient) runs
//! through [`retry`]. The caller may pass a [`Retries`] list to override the
//! class defaults from [`ClientConfig`](crate::config::ClientConfig):
//!
//! - **read** (list/get): more tries, low backoff ceiling, short deadline
//! - **write** (create/update/remove): few tries, longer deadline
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use ovirt_client::errors::ClientError;
//! use ovirt_client::retry::{retry, RetryStrategy, TracingLogger};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let strategies = [
//!     RetryStrategy::MaxTries(3),
//!     RetryStrategy::FixedBackoff(Duration::from_millis(1)),
//! ];
//! let mut calls = 0;
//! let result = retry("pinging engine", &TracingLogger, &strategies, || {
//!     calls += 1;
//!     async { Err::<(), _>(ClientError::remote("engine unavailable")) }
//! })
//! .await;
//!
//! assert_eq!(calls, 3);
//! assert_eq!(result.unwrap_err().attempts(), Some(3));
//! # }
//! ```

pub mod executor;
pub mod logger;
pub mod strategy;

pub use executor::retry;
pub use logger::{Logger, NoopLogger, TracingLogger};
pub use strategy::{Retries, RetryStrategy};
