//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events to stdout)
//! ```
//!
//! # Design Decisions
//! - Progress messages are ordinary info events
//! - Secrets never appear in fields

pub mod logging;
