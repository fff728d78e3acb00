//! Transport seam between management calls and the network.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::TransportError;
use crate::http::request::{ApiRequest, Method};
use crate::http::response::ApiResponse;
use crate::resilience::timeouts::classify;

/// Sends one request and buffers the response.
///
/// Implementations must not retry; retrying is the caller's decision.
pub trait HttpTransport: Send + Sync {
    fn send(
        &self,
        request: &ApiRequest,
        timeout: Duration,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;
}

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        request: &ApiRequest,
        timeout: Duration,
    ) -> Result<ApiResponse, TransportError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => {
                let builder = self.client.post(&request.url);
                match &request.body {
                    Some(body) => builder.body(body.clone()),
                    None => builder,
                }
            }
        };

        let res = builder
            .headers(request.headers.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(classify)?;

        let status = res.status();
        // Body reads count against the same per-attempt timeout.
        let body = res.text().await.map_err(classify)?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            "Management API responded"
        );

        Ok(ApiResponse::new(status, body))
    }
}
