//! Buffered response handed back to callers.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{CleanupError, CleanupResult};

/// Status and fully-read body of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == StatusCode::TOO_MANY_REQUESTS
    }

    /// Fail with `UnexpectedStatus` unless the status is 2xx.
    pub fn require_success(self, operation: &'static str) -> CleanupResult<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(CleanupError::UnexpectedStatus {
                operation,
                status: self.status,
                body: self.body,
            })
        }
    }

    /// Fail with `UnexpectedStatus` unless the status is exactly 200.
    pub fn require_ok(self, operation: &'static str) -> CleanupResult<Self> {
        if self.status == StatusCode::OK {
            Ok(self)
        } else {
            Err(CleanupError::UnexpectedStatus {
                operation,
                status: self.status,
                body: self.body,
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self, operation: &'static str) -> CleanupResult<T> {
        serde_json::from_str(&self.body).map_err(|e| CleanupError::Decode { operation, source: e })
    }
}
