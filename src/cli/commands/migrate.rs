//! Migrate command implementation
//!
//! Runs one end-to-end dashboard migration from the environment-sourced
//! configuration.

use crate::config::MigrationConfig;
use crate::core::migrate::MigrationOrchestrator;
use crate::domain::{DashportError, MigrationResponse};
use clap::Args;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Override seconds between job status polls
    #[arg(long)]
    pub poll_interval_secs: Option<u64>,

    /// Override the number of status polls per job
    #[arg(long)]
    pub poll_max_attempts: Option<u32>,
}

impl MigrateArgs {
    /// Execute the migrate command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!("Starting migrate command");

        let mut config = match MigrationConfig::from_env() {
            Ok(config) => config,
            Err(DashportError::MissingConfiguration(missing)) => {
                let response = MigrationResponse::missing_configuration(&missing);
                eprintln!("{}", response.body);
                return Ok(2); // Configuration error exit code
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        // Apply CLI overrides
        if let Some(interval) = self.poll_interval_secs {
            tracing::info!(interval, "Overriding poll interval from CLI");
            config.poll_interval_secs = interval;
        }
        if let Some(attempts) = self.poll_max_attempts {
            tracing::info!(attempts, "Overriding poll attempts from CLI");
            config.poll_max_attempts = attempts;
        }

        // Confirmation prompt (unless --yes)
        if !self.yes {
            println!("Migration Configuration:");
            println!("  Source account: {}", config.source_account_id);
            println!("  Target account: {}", config.target_account_id);
            println!("  Dashboard: {}", config.source_dashboard_id);
            println!("  Relay bucket: {}", config.s3_bucket);
            println!("  Region: {}", config.region);
            println!();
            print!("Proceed with migration? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Migration cancelled.");
                return Ok(0);
            }
        }

        tracing::info!("Creating migration orchestrator");
        let orchestrator = match MigrationOrchestrator::from_config(config).await {
            Ok(o) => o,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create migration orchestrator");
                eprintln!("Failed to initialize migration: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        match orchestrator.run().await {
            Ok(response) => {
                println!("{}", response.body);
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Migration failed");
                eprintln!("Migration failed: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_args_defaults() {
        let args = MigrateArgs {
            yes: false,
            poll_interval_secs: None,
            poll_max_attempts: None,
        };

        assert!(!args.yes);
        assert!(args.poll_interval_secs.is_none());
        assert!(args.poll_max_attempts.is_none());
    }
}
