//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (dotenvy)
//!     → process environment
//! optional settings file (TOML)
//!     → loader.rs (defaults → file → env → CLI overrides)
//!     → validation.rs (semantic checks)
//!     → CleanupConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so a settings file is optional
//! - Credentials only from the environment in normal use

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, ConfigOverrides};
pub use schema::{CleanupConfig, RetryConfig};
