//! Logging and observability
//!
//! This module provides structured logging with:
//! - Console output with configurable log levels
//! - Optional JSON-formatted file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use dashport::logging::{init_logging, LoggingConfig};
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingConfig, LoggingGuard};
