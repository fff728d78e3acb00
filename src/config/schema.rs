//! Configuration schema definitions.
//!
//! All types derive Serde traits so tuning values can come from a TOML file.
//! Credentials normally come from the environment and are never serialized.

use serde::{Deserialize, Serialize};

/// Default management API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.descope.com";

/// Root configuration for a reset run.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CleanupConfig {
    /// Project to reset.
    pub project_id: String,

    /// Management key authorizing administrative calls.
    #[serde(skip_serializing)]
    pub management_key: String,

    /// Management API origin (e.g., "https://api.descope.com").
    pub base_url: String,

    /// Log user-deletion progress every N deletions.
    pub progress_interval: usize,

    /// Retry settings for the raw custom-attribute calls.
    pub retries: RetryConfig,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            management_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            progress_interval: 10,
            retries: RetryConfig::default(),
        }
    }
}

impl std::fmt::Debug for CleanupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CleanupConfig")
            .field("project_id", &self.project_id)
            .field("management_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("progress_interval", &self.progress_interval)
            .field("retries", &self.retries)
            .finish()
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts before giving up.
    pub max_retries: u32,

    /// Per-attempt timeout in seconds.
    pub timeout_secs: u64,

    /// Backoff base; attempt `n` waits `base^n` seconds.
    pub backoff_base_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 4,
            timeout_secs: 10,
            backoff_base_secs: 5,
        }
    }
}
