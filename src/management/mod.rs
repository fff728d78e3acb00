//! Descope management integration.
//!
//! # Data Flow
//! ```text
//! CleanupConfig (project id, management key, base URL)
//!     → client.rs (authenticated DescopeClient)
//!     → api.rs (ManagementApi capability used by cleanup passes)
//!     → types.rs (resources and wire payloads)
//! ```
//!
//! # Security Constraints
//! - Management key only from the environment or config
//! - Never log the management key; the auth header is marked sensitive

pub mod api;
pub mod client;
pub mod types;

pub use api::ManagementApi;
pub use client::DescopeClient;
pub use types::{CustomAttribute, Permission, Role, Tenant, User};
