//! Domain error types
//!
//! This module defines the error hierarchy for Dashport. All errors are
//! domain-specific and don't expose third-party types: SDK and HTTP errors
//! are stringified at the adapter boundary.

use super::job::MigrationPhase;
use thiserror::Error;

/// Main Dashport error type
///
/// One variant per failure class of a migration run. Only
/// [`DashportError::MissingConfiguration`] is recovered into a structured
/// response; every other variant aborts the invocation.
#[derive(Debug, Error)]
pub enum DashportError {
    /// One or more required environment variables are absent
    ///
    /// Carries every missing name, in the order checked.
    #[error("Missing required environment variables: {0:?}")]
    MissingConfiguration(Vec<String>),

    /// Configuration value present but unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote service rejected a job request
    #[error("Error starting {phase} job: {message}")]
    Submission {
        phase: MigrationPhase,
        message: String,
    },

    /// A single job status check failed
    ///
    /// Swallowed and logged inside the poll loop; never terminates a run
    /// on its own.
    #[error("Error describing {phase} job: {message}")]
    StatusCheck {
        phase: MigrationPhase,
        message: String,
    },

    /// The poll budget was exhausted, or the job reported a terminal failure
    #[error("{phase} job failed or timed out. Status: {}", .last_status.as_deref().unwrap_or("None"))]
    JobFailed {
        phase: MigrationPhase,
        last_status: Option<String>,
    },

    /// Downloading the exported bundle failed
    #[error("Transfer error: {0}")]
    Transfer(String),

    /// Writing the bundle to relay storage failed
    #[error("Relay storage error: {0}")]
    Storage(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DashportError {
    fn from(err: std::io::Error) -> Self {
        DashportError::Io(err.to_string())
    }
}
