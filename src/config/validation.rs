//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check credentials are present before any call is made
//! - Validate value ranges (retries, timeouts, backoff > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CleanupConfig → Result<(), Vec<ValidationError>>

use crate::config::loader::{MANAGEMENT_KEY_VAR, PROJECT_ID_VAR};
use crate::config::schema::CleanupConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a fully layered configuration.
pub fn validate_config(config: &CleanupConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.project_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "project_id",
            format!("missing; set {}", PROJECT_ID_VAR),
        ));
    }
    if config.management_key.trim().is_empty() {
        errors.push(ValidationError::new(
            "management_key",
            format!("missing; set {}", MANAGEMENT_KEY_VAR),
        ));
    }

    match url::Url::parse(&config.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            "base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "base_url",
            format!("invalid URL '{}': {}", config.base_url, e),
        )),
    }

    if config.retries.max_retries == 0 {
        errors.push(ValidationError::new("retries.max_retries", "must be at least 1"));
    }
    if config.retries.timeout_secs == 0 {
        errors.push(ValidationError::new("retries.timeout_secs", "must be at least 1"));
    }
    if config.retries.backoff_base_secs == 0 {
        errors.push(ValidationError::new("retries.backoff_base_secs", "must be at least 1"));
    }
    if config.progress_interval == 0 {
        errors.push(ValidationError::new("progress_interval", "must be at least 1"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
