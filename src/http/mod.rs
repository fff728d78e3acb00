//! HTTP plumbing for management API calls.
//!
//! # Data Flow
//! ```text
//! management client
//!     → request.rs (method, URL, bearer headers, JSON body)
//!     → transport.rs (reqwest send with per-attempt timeout)
//!     → response.rs (status + buffered body, JSON decode)
//! ```

pub mod request;
pub mod response;
pub mod transport;

pub use request::{bearer_headers, ApiRequest, Method};
pub use response::ApiResponse;
pub use transport::{HttpTransport, ReqwestTransport};
