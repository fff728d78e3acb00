//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Raw management call:
//!     → timeouts.rs (per-attempt deadline, classify failures)
//!     → retries.rs (retry 429 / read timeout, abort otherwise)
//!     → backoff.rs (base^attempt seconds between attempts)
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every call has a deadline
//! - Only rate limiting and read timeouts are retryable
//! - SDK-style calls are single-shot and do not pass through here

pub mod backoff;
pub mod retries;
pub mod timeouts;

pub use retries::{RetryError, RetryPolicy, RetryingCaller, Sleeper, TokioSleeper};
