// Copyright (c) 2025 - Cowboy AI, Inc.
//! Retry strategies and the per-call strategy list

use std::time::Duration;

use crate::config::RetryDefaults;

/// One resilience policy applied to a logical operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStrategy {
    /// Give up after this many attempts (the first call counts). The first
    /// attempt always runs, so `MaxTries(0)` behaves as `MaxTries(1)`.
    MaxTries(u32),

    /// Give up once the next attempt would start after this much time
    /// has passed since the first one
    Deadline(Duration),

    /// Wait a constant delay between attempts
    FixedBackoff(Duration),

    /// Wait `initial × factor^(n-1)` after the n-th failure, capped at `ceiling`
    ExponentialBackoff {
        initial: Duration,
        factor: u32,
        ceiling: Duration,
    },
}

impl RetryStrategy {
    /// Whether this strategy limits how long retrying can go on
    pub fn is_bounding(&self) -> bool {
        matches!(self, RetryStrategy::MaxTries(_) | RetryStrategy::Deadline(_))
    }

    /// Whether this strategy spaces out attempts
    pub fn is_backoff(&self) -> bool {
        matches!(self, RetryStrategy::FixedBackoff(_) | RetryStrategy::ExponentialBackoff { .. })
    }

    /// Delay requested after `failures` failed attempts (1-based)
    pub fn backoff(&self, failures: u32) -> Option<Duration> {
        match *self {
            RetryStrategy::FixedBackoff(delay) => Some(delay),
            RetryStrategy::ExponentialBackoff {
                initial,
                factor,
                ceiling,
            } => {
                let exponent = failures.saturating_sub(1);
                let multiplier = factor.max(1).checked_pow(exponent).unwrap_or(u32::MAX);
                let delay = initial.checked_mul(multiplier).unwrap_or(ceiling);
                Some(delay.min(ceiling))
            }
            RetryStrategy::MaxTries(_) | RetryStrategy::Deadline(_) => None,
        }
    }
}

/// Ordered list of strategies passed to a client operation.
///
/// The empty list (`Retries::default()`) means "no override": the client
/// substitutes the defaults of the operation class (read or write).
///
/// ```rust
/// use std::time::Duration;
/// use ovirt_client::Retries;
///
/// let retries = Retries::new()
///     .max_tries(5)
///     .fixed_backoff(Duration::from_millis(250));
/// assert_eq!(retries.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Retries(Vec<RetryStrategy>);

impl Retries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, strategy: RetryStrategy) -> Self {
        self.0.push(strategy);
        self
    }

    pub fn max_tries(self, tries: u32) -> Self {
        self.with(RetryStrategy::MaxTries(tries))
    }

    pub fn deadline(self, deadline: Duration) -> Self {
        self.with(RetryStrategy::Deadline(deadline))
    }

    pub fn fixed_backoff(self, delay: Duration) -> Self {
        self.with(RetryStrategy::FixedBackoff(delay))
    }

    pub fn exponential_backoff(self, initial: Duration, factor: u32, ceiling: Duration) -> Self {
        self.with(RetryStrategy::ExponentialBackoff {
            initial,
            factor,
            ceiling,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn strategies(&self) -> &[RetryStrategy] {
        &self.0
    }

    /// Resolve caller overrides against the class defaults.
    ///
    /// An empty list becomes the defaults. Otherwise each half the caller
    /// left out is filled from the defaults: a list without a bounding
    /// strategy gets the default bounds, and a list without a backoff
    /// strategy gets the default backoff.
    pub fn resolve(self, defaults: &RetryDefaults) -> Vec<RetryStrategy> {
        let fallback = defaults.strategies();
        if self.0.is_empty() {
            return fallback;
        }

        let mut strategies = self.0;
        let bounded = strategies.iter().any(RetryStrategy::is_bounding);
        let paced = strategies.iter().any(RetryStrategy::is_backoff);
        strategies.extend(
            fallback
                .into_iter()
                .filter(|strategy| if strategy.is_bounding() { !bounded } else { !paced }),
        );
        strategies
    }
}

impl From<Vec<RetryStrategy>> for Retries {
    fn from(strategies: Vec<RetryStrategy>) -> Self {
        Self(strategies)
    }
}

impl FromIterator<RetryStrategy> for Retries {
    fn from_iter<I: IntoIterator<Item = RetryStrategy>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
