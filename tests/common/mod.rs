//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use descope_reset::http::ReqwestTransport;
use descope_reset::resilience::{RetryPolicy, RetryingCaller};
use descope_reset::DescopeClient;

pub const PROJECT_ID: &str = "P2abc";
pub const MANAGEMENT_KEY: &str = "K2xyz";

/// What a programmable backend does with one connection.
#[allow(dead_code)]
pub enum Reply {
    Status(u16, String),
    /// Hold the connection open without answering.
    Silent,
}

/// Start a programmable backend on an ephemeral port.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Reply> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Drain the request head before answering.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = match f().await {
                            Reply::Status(status, body) => (status, body),
                            Reply::Silent => {
                                tokio::time::sleep(Duration::from_secs(30)).await;
                                return;
                            }
                        };
                        let status_text = match status {
                            200 => "200 OK",
                            401 => "401 Unauthorized",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Client against `base_url` that bypasses any system proxy.
#[allow(dead_code)]
pub fn client(base_url: &str, policy: RetryPolicy) -> DescopeClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let caller = RetryingCaller::new(ReqwestTransport::new(http), policy);
    DescopeClient::with_caller(PROJECT_ID, MANAGEMENT_KEY, base_url, caller).unwrap()
}

/// Fast policy: one-second backoff base, short timeout.
#[allow(dead_code)]
pub fn fast_policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        timeout: Duration::from_millis(500),
        backoff_base_secs: 1,
    }
}
