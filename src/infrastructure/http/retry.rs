//! Retry policy for transient upstream failures.

use std::future::Future;
use std::time::Duration;

use tokio_retry::RetryIf;
use tokio_retry::strategy::jitter;
use tracing::warn;

use crate::domain::clients::{Upstream, UpstreamError};

/// Bounded exponential backoff applied to connection-level failures.
///
/// Only [`UpstreamError::Unavailable`] is retried. A 404, 4xx or 5xx is a
/// definitive answer from the upstream and is returned immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt (0 disables retrying).
    pub max_retries: u32,
    /// Delay before the first retry; doubled for each following one.
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, backoff: Duration) -> Self {
        Self {
            max_retries,
            backoff,
        }
    }

    /// A policy that never retries.
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Delays between attempts, before jitter.
    pub fn delays(&self) -> impl Iterator<Item = Duration> {
        let backoff = self.backoff;
        (0..self.max_retries).map(move |attempt| backoff.saturating_mul(1u32 << attempt.min(16)))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(1, Duration::from_millis(100))
    }
}

/// Runs `operation`, retrying transient failures according to `policy`.
pub async fn with_retries<F, Fut, T>(
    policy: &RetryPolicy,
    upstream: Upstream,
    operation: F,
) -> Result<T, UpstreamError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, UpstreamError>>,
{
    RetryIf::spawn(
        policy.delays().map(jitter),
        operation,
        |error: &UpstreamError| {
            let transient = error.is_transient();
            if transient {
                warn!(upstream = upstream.label(), %error, "Transient upstream failure");
            }
            transient
        },
    )
    .await
}
