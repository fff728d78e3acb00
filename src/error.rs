//! Crate-wide error types.
//!
//! SDK-style calls and the retrying raw calls both surface failures through
//! [`CleanupError`], so the orchestrator branches on one result type.

use reqwest::StatusCode;
use thiserror::Error;

use crate::resilience::retries::RetryError;

/// Errors produced by a transport while sending a single request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Timed out while waiting for or reading the response.
    #[error("read timed out: {0}")]
    Timeout(String),

    /// Any other request-level failure (DNS, connect, TLS, protocol).
    #[error("request failed: {0}")]
    Request(String),
}

/// Errors that can occur while resetting a project.
#[derive(Debug, Error)]
pub enum CleanupError {
    /// Management client could not be constructed.
    #[error("failed to initialize management client: {0}")]
    Init(String),

    /// A single-shot call failed at the transport level.
    #[error("{operation}: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    /// A retried call gave up or was aborted.
    #[error("{operation}: {source}")]
    Retry {
        operation: &'static str,
        #[source]
        source: RetryError,
    },

    /// The service answered with a status the operation does not accept.
    #[error("{operation} returned status {status}: {body}")]
    UnexpectedStatus {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },

    /// A JSON body could not be encoded or decoded.
    #[error("{operation}: invalid JSON: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A user record carried no login identifier to delete it by.
    #[error("user {0} has no login id")]
    MissingLoginId(String),
}

/// Result type for cleanup operations.
pub type CleanupResult<T> = Result<T, CleanupError>;
