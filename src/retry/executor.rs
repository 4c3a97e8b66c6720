// Copyright (c) 2025 - Cowboy AI, Inc.
//! Retry executor
//!
//! Repeatedly invokes a unit of work until it succeeds, fails with a
//! non-retryable error, or the strategies give up.
//!
//! ```text
//! attempt ──Ok──────────────────────────────> return value
//!    │
//!    Err(non-retryable) ────────────────────> return error as is
//!    │
//!    Err(retryable) ── bound reached? ──yes──> RetriesExhausted(last error)
//!                           │
//!                           no ── sleep(backoff) ──> next attempt
//! ```
//!
//! Attempts of one call never overlap. Different calls share nothing, so
//! any number of them can run concurrently.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::Level;

use super::logger::Logger;
use super::strategy::RetryStrategy;
use crate::errors::{ClientError, ClientResult, ErrorKind};

/// Run `work` under `strategies`.
///
/// A strategy list with no bounding strategy (`MaxTries` or `Deadline`)
/// allows a single attempt.
pub async fn retry<T, F, Fut>(
    operation: &str,
    logger: &dyn Logger,
    strategies: &[RetryStrategy],
    mut work: F,
) -> ClientResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ClientResult<T>>,
{
    let started = Instant::now();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        let err = match work().await {
            Ok(value) => {
                if attempt > 1 {
                    logger.log(
                        Level::DEBUG,
                        "operation succeeded after retrying",
                        &[("operation", &operation), ("attempt", &attempt)],
                    );
                }
                return Ok(value);
            }
            Err(err) => err,
        };

        if !err.is_retryable() {
            let level = if err.kind() == ErrorKind::Bug {
                Level::ERROR
            } else {
                Level::WARN
            };
            logger.log(
                level,
                "operation failed with a non-retryable error",
                &[
                    ("operation", &operation),
                    ("attempt", &attempt),
                    ("kind", &err.kind()),
                    ("error", &err as &dyn fmt::Display),
                ],
            );
            return Err(err);
        }

        logger.log(
            Level::DEBUG,
            "attempt failed",
            &[
                ("operation", &operation),
                ("attempt", &attempt),
                ("error", &err as &dyn fmt::Display),
            ],
        );

        match next_delay(strategies, attempt, started.elapsed()) {
            Some(delay) => sleep(delay).await,
            None => {
                logger.log(
                    Level::ERROR,
                    "retries exhausted",
                    &[
                        ("operation", &operation),
                        ("attempts", &attempt),
                        ("error", &err as &dyn fmt::Display),
                    ],
                );
                return Err(ClientError::RetriesExhausted {
                    operation: operation.to_string(),
                    attempts: attempt,
                    source: Box::new(err),
                });
            }
        }
    }
}

/// Delay before the next attempt, or `None` when any bound is reached
fn next_delay(strategies: &[RetryStrategy], failures: u32, elapsed: Duration) -> Option<Duration> {
    if !strategies.iter().any(RetryStrategy::is_bounding) {
        return None;
    }

    let delay = strategies
        .iter()
        .filter_map(|strategy| strategy.backoff(failures))
        .max()
        .unwrap_or(Duration::ZERO);

    for strategy in strategies {
        match *strategy {
            RetryStrategy::MaxTries(max) if failures >= max => return None,
            RetryStrategy::Deadline(deadline) if elapsed + delay >= deadline => return None,
            _ => {}
        }
    }

    Some(delay)
}
