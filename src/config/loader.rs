//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::CleanupConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the project id.
pub const PROJECT_ID_VAR: &str = "DESCOPE_PROJECT_ID";

/// Environment variable holding the management key. The spelling is the one
/// existing `.env` files use.
pub const MANAGEMENT_KEY_VAR: &str = "DESCOPE_MANAGMENT_KEY";

/// Optional environment override for the API origin.
pub const BASE_URL_VAR: &str = "DESCOPE_BASE_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub max_retries: Option<u32>,
    pub timeout_secs: Option<u64>,
}

/// Load an `.env` style file into the process environment.
///
/// A missing file is not an error; variables may already be exported.
pub fn load_env_file(path: &Path) -> Result<(), ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Loaded environment file");
            Ok(())
        }
        Err(e) if e.not_found() => {
            tracing::debug!(path = %path.display(), "No environment file found");
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) => Err(ConfigError::Io(e)),
        Err(e) => Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))),
    }
}

/// Parse a TOML settings file.
pub fn load_file(path: &Path) -> Result<CleanupConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Overlay environment values onto `config`.
///
/// `lookup` abstracts `std::env::var` so tests need not touch process state.
pub fn apply_env<F>(config: &mut CleanupConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(project_id) = lookup(PROJECT_ID_VAR) {
        config.project_id = project_id;
    }
    if let Some(key) = lookup(MANAGEMENT_KEY_VAR) {
        config.management_key = key;
    }
    if let Some(base_url) = lookup(BASE_URL_VAR) {
        config.base_url = base_url;
    }
}

/// Overlay command-line values onto `config`.
pub fn apply_overrides(config: &mut CleanupConfig, overrides: &ConfigOverrides) {
    if let Some(base_url) = &overrides.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(max_retries) = overrides.max_retries {
        config.retries.max_retries = max_retries;
    }
    if let Some(timeout_secs) = overrides.timeout_secs {
        config.retries.timeout_secs = timeout_secs;
    }
}

/// Build and validate the configuration from all layers.
///
/// Order: defaults, optional TOML file, environment, command line.
pub fn load_config<F>(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
    lookup: F,
) -> Result<CleanupConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => load_file(path)?,
        None => CleanupConfig::default(),
    };
    apply_env(&mut config, lookup);
    apply_overrides(&mut config, overrides);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
