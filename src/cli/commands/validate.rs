//! Validate-config command implementation
//!
//! Checks the environment without contacting any remote service.

use crate::config::MigrationConfig;
use crate::domain::DashportError;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!("Validating configuration");

        match MigrationConfig::from_env() {
            Ok(config) => {
                println!("Configuration is valid.");
                println!("  Source account: {}", config.source_account_id);
                println!("  Target account: {}", config.target_account_id);
                println!("  Dashboard: {}", config.source_dashboard_id);
                println!("  Relay bucket: {}", config.s3_bucket);
                println!("  Region: {}", config.region);
                println!(
                    "  Polling: every {}s, up to {} attempts per job",
                    config.poll_interval_secs, config.poll_max_attempts
                );
                Ok(0)
            }
            Err(DashportError::MissingConfiguration(missing)) => {
                eprintln!("Missing required environment variables:");
                for name in &missing {
                    eprintln!("  - {name}");
                }
                Ok(2)
            }
            Err(e) => {
                tracing::error!(error = %e, "Configuration validation failed");
                eprintln!("Configuration validation failed: {e}");
                Ok(2)
            }
        }
    }
}
