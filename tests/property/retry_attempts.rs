// Copyright (c) 2025 - Cowboy AI, Inc.
//! Properties of the retry executor
//!
//! Each case runs on its own current-thread runtime with a paused clock, so
//! backoff sleeps complete instantly and deterministically.

use std::future::Future;
use std::time::Duration;

use proptest::prelude::*;
use tokio::runtime::Builder;

use ovirt_client::errors::{ClientError, ErrorKind};
use ovirt_client::retry::{retry, NoopLogger, RetryStrategy};

use crate::fixtures::error_of;

fn block_on<F: Future>(future: F) -> F::Output {
    Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .expect("runtime")
        .block_on(future)
}

fn retryable_kind() -> impl Strategy<Value = ErrorKind> {
    prop_oneof![Just(ErrorKind::Timeout), Just(ErrorKind::RemoteFailure)]
}

fn fatal_kind() -> impl Strategy<Value = ErrorKind> {
    prop_oneof![
        Just(ErrorKind::FieldMissing),
        Just(ErrorKind::BadArgument),
        Just(ErrorKind::Bug),
        Just(ErrorKind::NotFound),
    ]
}

/// Run an always-failing operation and count its invocations
fn count_attempts(strategies: &[RetryStrategy], kind: ErrorKind) -> (u32, ClientError) {
    block_on(async {
        let mut calls = 0u32;
        let err = retry("probing", &NoopLogger, strategies, || {
            calls += 1;
            async move { Err::<(), _>(error_of(kind, "engine unavailable")) }
        })
        .await
        .unwrap_err();
        (calls, err)
    })
}

proptest! {
    /// Property: MaxTries(n) with only retryable failures makes exactly n attempts
    #[test]
    fn prop_max_tries_bounds_attempts(tries in 1u32..12, kind in retryable_kind()) {
        let strategies = [
            RetryStrategy::MaxTries(tries),
            RetryStrategy::FixedBackoff(Duration::from_millis(10)),
        ];

        let (calls, err) = count_attempts(&strategies, kind);

        prop_assert_eq!(calls, tries);
        prop_assert!(err.is_exhausted());
        prop_assert_eq!(err.attempts(), Some(tries));
        prop_assert_eq!(err.kind(), kind);
    }

    /// Property: A non-retryable failure stops after the first attempt
    #[test]
    fn prop_fatal_error_is_not_retried(tries in 1u32..12, kind in fatal_kind()) {
        let strategies = [RetryStrategy::MaxTries(tries)];

        let (calls, err) = count_attempts(&strategies, kind);

        prop_assert_eq!(calls, 1);
        prop_assert!(!err.is_exhausted());
        prop_assert_eq!(err.kind(), kind);
    }

    /// Property: Without a bounding strategy there is exactly one attempt
    #[test]
    fn prop_unbounded_list_is_single_attempt(delay_ms in 0u64..1000, kind in retryable_kind()) {
        let strategies = [RetryStrategy::FixedBackoff(Duration::from_millis(delay_ms))];

        let (calls, err) = count_attempts(&strategies, kind);

        prop_assert_eq!(calls, 1);
        prop_assert_eq!(err.attempts(), Some(1));
    }

    /// Property: Exponential backoff never decreases and never passes its ceiling
    #[test]
    fn prop_exponential_backoff_is_monotonic_and_capped(
        initial_ms in 1u64..1_000,
        factor in 1u32..8,
        ceiling_ms in 1u64..60_000,
    ) {
        let ceiling = Duration::from_millis(ceiling_ms);
        let strategy = RetryStrategy::ExponentialBackoff {
            initial: Duration::from_millis(initial_ms),
            factor,
            ceiling,
        };

        let delays: Vec<Duration> = (1..=40)
            .map(|failures| strategy.backoff(failures).unwrap())
            .collect();

        prop_assert!(delays.iter().all(|delay| *delay <= ceiling));
        prop_assert!(delays.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(delays[0], Duration::from_millis(initial_ms).min(ceiling));
    }

    /// Property: A deadline stops retrying before the elapsed time passes it
    #[test]
    fn prop_deadline_bounds_elapsed_time(delay_ms in 1u64..500, deadline_ms in 1u64..5_000) {
        let deadline = Duration::from_millis(deadline_ms);
        let strategies = [
            RetryStrategy::Deadline(deadline),
            RetryStrategy::FixedBackoff(Duration::from_millis(delay_ms)),
        ];

        let elapsed = block_on(async {
            let started = tokio::time::Instant::now();
            let _ = retry("probing", &NoopLogger, &strategies, || async {
                Err::<(), _>(ClientError::timeout("engine unavailable"))
            })
            .await;
            started.elapsed()
        });

        prop_assert!(elapsed < deadline, "{:?} should stay below {:?}", elapsed, deadline);
    }
}
