//! Outgoing request description.
//!
//! # Responsibilities
//! - Describe one management API call independently of the transport
//! - Carry the bearer credential and JSON content type
//!
//! # Design Decisions
//! - Only GET and POST are representable; the management API needs no others
//! - Bodies are pre-serialized JSON so the exact payload is inspectable in tests

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use crate::error::{CleanupError, CleanupResult};

/// HTTP verbs the management calls use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A single request to send.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    /// JSON payload, POST only.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers,
            body: None,
        }
    }

    /// Build a POST carrying `payload` as JSON.
    pub fn post_json<T: Serialize>(
        url: impl Into<String>,
        mut headers: HeaderMap,
        payload: &T,
    ) -> CleanupResult<Self> {
        let body = serde_json::to_string(payload).map_err(|e| CleanupError::Decode {
            operation: "encode request body",
            source: e,
        })?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(Self {
            method: Method::Post,
            url: url.into(),
            headers,
            body: Some(body),
        })
    }
}

/// Build the `Authorization: Bearer <project_id>:<management_key>` header set.
pub fn bearer_headers(project_id: &str, management_key: &str) -> CleanupResult<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}:{}", project_id, management_key))
        .map_err(|e| CleanupError::Init(format!("invalid credential characters: {}", e)))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}
