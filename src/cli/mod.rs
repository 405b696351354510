//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Dashport using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Dashport - QuickSight dashboard migration tool
#[derive(Parser, Debug)]
#[command(name = "dashport")]
#[command(version, about, long_about = None)]
#[command(author = "Dashport Contributors")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DASHPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Migrate the configured dashboard from the source to the target account
    Migrate(commands::migrate::MigrateArgs),

    /// Check that the environment holds every required configuration value
    ValidateConfig(commands::validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_migrate() {
        let cli = Cli::parse_from(["dashport", "migrate"]);
        assert!(matches!(cli.command, Commands::Migrate(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["dashport", "--log-level", "debug", "migrate"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["dashport", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_migrate_with_poll_overrides() {
        let cli = Cli::parse_from([
            "dashport",
            "migrate",
            "--yes",
            "--poll-interval-secs",
            "5",
            "--poll-max-attempts",
            "24",
        ]);
        match cli.command {
            Commands::Migrate(args) => {
                assert!(args.yes);
                assert_eq!(args.poll_interval_secs, Some(5));
                assert_eq!(args.poll_max_attempts, Some(24));
            }
            other => panic!("Expected Migrate, got {other:?}"),
        }
    }
}
