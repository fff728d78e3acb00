//! Timeout enforcement and transport error classification.
//!
//! # Responsibilities
//! - Turn configured seconds into the per-attempt deadline
//! - Separate read timeouts (retryable) from every other request failure
//!
//! # Design Decisions
//! - A timeout while connecting is a connect failure, not a read timeout
//! - Timeout errors are distinct from other errors

use std::time::Duration;

use crate::error::TransportError;

/// Per-attempt deadline covering send and body read.
pub fn request_timeout(timeout_secs: u64) -> Duration {
    Duration::from_secs(timeout_secs)
}

/// Map a reqwest failure onto the retry taxonomy.
pub fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() && !err.is_connect() {
        TransportError::Timeout(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}
