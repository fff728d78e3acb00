//! Project reset orchestration.
//!
//! # Data Flow
//! ```text
//! ManagementApi handle
//!     → orchestrator.rs (users → custom attributes → tenants → permissions → roles)
//!     → report.rs (RunSummary, logged at the end)
//! ```
//!
//! # Design Decisions
//! - Strictly sequential; one record at a time in list order
//! - Each pass lists once at its start and never reads another pass's data
//! - No filtering: every listed record is deleted

pub mod orchestrator;
pub mod report;

pub use orchestrator::Cleanup;
pub use report::{Pass, RunSummary, SkippedPass};
