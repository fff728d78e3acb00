//! Descope project reset library

pub mod cleanup;
pub mod config;
pub mod error;
pub mod http;
pub mod management;
pub mod observability;
pub mod resilience;

pub use cleanup::{Cleanup, RunSummary};
pub use config::CleanupConfig;
pub use error::{CleanupError, CleanupResult};
pub use management::{DescopeClient, ManagementApi};
