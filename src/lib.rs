// Dashport - QuickSight dashboard migration tool
// Copyright (c) 2025 Dashport Contributors
// Licensed under the MIT License

//! # Dashport - cross-account dashboard migration
//!
//! Dashport migrates a QuickSight dashboard and its dependencies from one AWS
//! account to another. It drives one end-to-end migration: export an asset
//! bundle from the source account, relay the bundle through an S3 bucket, and
//! import it into the target account under a freshly generated name.
//!
//! ## Overview
//!
//! A run is a single linear procedure:
//!
//! 1. Validate configuration (all values come from the process environment)
//! 2. Generate run identifiers sharing one random 4-digit token
//! 3. Start the asset bundle export job and poll it to completion
//! 4. Download the bundle from the presigned URL and put it into the relay bucket
//! 5. Start the asset bundle import job (renaming the dashboard) and poll it
//! 6. Report success or fail with the most specific condition available
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Migration orchestration and the job poll loop
//! - [`adapters`] - External collaborators (QuickSight, S3, HTTP transfer)
//! - [`domain`] - Errors, identifiers, job statuses, run tokens
//! - [`config`] - Environment-sourced configuration and secret handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dashport::config::MigrationConfig;
//! use dashport::core::migrate::MigrationOrchestrator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MigrationConfig::from_env()?;
//!     let orchestrator = MigrationOrchestrator::from_config(config).await?;
//!
//!     let response = orchestrator.run().await?;
//!     println!("{}", response.body);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`] with
//! [`domain::DashportError`] as the error type. A missing-configuration error
//! is the only condition recovered into a structured response; every other
//! fatal condition propagates and terminates the invocation abnormally.
//!
//! ## Logging
//!
//! Dashport uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! tracing::info!(export_job_id = "export-job-1234", "Export job submitted");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
