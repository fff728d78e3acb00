//! Descope project reset.
//!
//! Deletes every user, custom user attribute, tenant, permission and role in
//! one Descope project, then exits.
//!
//! ```text
//!   .env / settings file / flags
//!            │
//!            ▼
//!     ┌─────────────┐     ┌────────────────┐     ┌──────────────────────┐
//!     │   config    │────▶│ DescopeClient  │────▶│ Cleanup (5 passes)   │
//!     └─────────────┘     │  + retry layer │     │ users → attrs →      │
//!                         └────────────────┘     │ tenants → perms →    │
//!                                                │ roles                │
//!                                                └──────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use descope_reset::config::loader::{load_config, load_env_file};
use descope_reset::config::ConfigOverrides;
use descope_reset::observability::logging;
use descope_reset::{Cleanup, DescopeClient};

#[derive(Parser)]
#[command(name = "descope-reset")]
#[command(about = "Delete all users, custom attributes, tenants, permissions and roles in a Descope project", long_about = None)]
struct Cli {
    /// Environment file with DESCOPE_PROJECT_ID and DESCOPE_MANAGMENT_KEY
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Optional TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Management API origin
    #[arg(long)]
    base_url: Option<String>,

    /// Attempts for rate-limited or timed-out custom attribute calls
    #[arg(long)]
    max_retries: Option<u32>,

    /// Per-attempt timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    tracing::info!("descope-reset v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = load_env_file(&cli.env_file) {
        tracing::error!(error = %e, path = %cli.env_file.display(), "Failed to read environment file");
        return ExitCode::FAILURE;
    }

    let overrides = ConfigOverrides {
        base_url: cli.base_url,
        max_retries: cli.max_retries,
        timeout_secs: cli.timeout_secs,
    };
    let config = match load_config(cli.config.as_deref(), &overrides, |key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        project_id = %config.project_id,
        base_url = %config.base_url,
        max_retries = config.retries.max_retries,
        timeout_secs = config.retries.timeout_secs,
        "Configuration loaded"
    );

    let client = match DescopeClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to initialize Descope Client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let cleanup = Cleanup::new(client, config.progress_interval);
    match cleanup.run().await {
        Ok(summary) => {
            summary.log();
            tracing::info!(complete = summary.is_complete(), "Reset finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Reset halted");
            ExitCode::FAILURE
        }
    }
}
