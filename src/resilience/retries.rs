//! Retrying HTTP caller.
//!
//! # Responsibilities
//! - Send one GET or POST with a per-attempt timeout
//! - Retry on 429 and on read timeouts with `base^attempt` second backoff
//! - Abort without retrying on any other transport failure
//!
//! # Design Decisions
//! - Any non-429 response is returned as-is; the caller judges the status
//! - Giving up is an explicit `RetryError`, never an absent response
//! - A backoff sleep follows every failed attempt, the last one included
//! - Sleeping goes through [`Sleeper`] so schedules are testable

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::config::RetryConfig;
use crate::error::TransportError;
use crate::http::{ApiRequest, ApiResponse, HttpTransport};
use crate::resilience::backoff::calculate_backoff;
use crate::resilience::timeouts::request_timeout;

/// Why a retried call produced no response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RetryError {
    /// Every attempt was rate limited or timed out.
    #[error("max retries reached after {attempts} attempts")]
    Exhausted { attempts: u32 },

    /// A non-retryable transport failure stopped the call.
    #[error("request aborted: {0}")]
    Aborted(#[source] TransportError),
}

/// Waits between attempts.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Production sleeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Retry limits for a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub timeout: Duration,
    pub backoff_base_secs: u64,
}

impl RetryPolicy {
    /// Delay after the `attempt`-th failed attempt (1-indexed).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        calculate_backoff(attempt, self.backoff_base_secs)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            timeout: request_timeout(config.timeout_secs),
            backoff_base_secs: config.backoff_base_secs,
        }
    }
}

/// Wraps a transport with the rate-limit and timeout retry policy.
#[derive(Debug, Clone)]
pub struct RetryingCaller<T, S = TokioSleeper> {
    transport: T,
    sleeper: S,
    policy: RetryPolicy,
}

impl<T: HttpTransport> RetryingCaller<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self::with_sleeper(transport, TokioSleeper, policy)
    }
}

impl<T: HttpTransport, S: Sleeper> RetryingCaller<T, S> {
    pub fn with_sleeper(transport: T, sleeper: S, policy: RetryPolicy) -> Self {
        Self {
            transport,
            sleeper,
            policy,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Send `request`, retrying on 429 and read timeouts.
    pub async fn call(&self, request: &ApiRequest) -> Result<ApiResponse, RetryError> {
        let max = self.policy.max_retries;
        let mut attempt = 0;

        while attempt < max {
            match self.transport.send(request, self.policy.timeout).await {
                Ok(response) if !response.is_rate_limited() => return Ok(response),
                Ok(_) => {
                    attempt += 1;
                    let delay = self.policy.delay_for(attempt);
                    tracing::warn!(
                        url = %request.url,
                        attempt,
                        "Rate limit reached. Retrying in {} seconds...",
                        delay.as_secs()
                    );
                    self.sleeper.sleep(delay).await;
                }
                Err(TransportError::Timeout(reason)) => {
                    tracing::warn!(
                        url = %request.url,
                        timeout_secs = self.policy.timeout.as_secs(),
                        reason = %reason,
                        "Read timed out"
                    );
                    attempt += 1;
                    let delay = self.policy.delay_for(attempt);
                    tracing::info!("Retrying attempt {}/{}...", attempt, max);
                    self.sleeper.sleep(delay).await;
                }
                Err(e) => {
                    tracing::error!(url = %request.url, error = %e, "A request exception occurred");
                    return Err(RetryError::Aborted(e));
                }
            }
        }

        tracing::error!(url = %request.url, attempts = attempt, "Max retries reached. Giving up.");
        Err(RetryError::Exhausted { attempts: attempt })
    }
}
