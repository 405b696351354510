//! Remote job types
//!
//! Asset bundle export and import jobs are asynchronous remote operations.
//! The orchestrator only ever sees their status strings and, for exports, a
//! time-limited download URL. Status strings are preserved verbatim so error
//! messages can report exactly what the service said.

use std::fmt;

/// Which half of the migration a job belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationPhase {
    Export,
    Import,
}

impl fmt::Display for MigrationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationPhase::Export => write!(f, "export"),
            MigrationPhase::Import => write!(f, "import"),
        }
    }
}

/// Status of a remote asset bundle job
///
/// Wraps the raw status string reported by the service. Known pending values
/// are `SUBMITTED`, `QUEUED_FOR_IMMEDIATE_EXECUTION` and `IN_PROGRESS`;
/// `SUCCESSFUL` is the only terminal success; `FAILED` and its rollback
/// variants are terminal failures. Anything else is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatus(String);

impl JobStatus {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Terminal success - the job completed and its artifacts are available
    pub fn is_successful(&self) -> bool {
        self.0 == "SUCCESSFUL"
    }

    /// Terminal failure - the service has declared the job dead
    pub fn is_terminal_failure(&self) -> bool {
        matches!(
            self.0.as_str(),
            "FAILED"
                | "FAILED_ROLLBACK_IN_PROGRESS"
                | "FAILED_ROLLBACK_COMPLETED"
                | "FAILED_ROLLBACK_ERROR"
        )
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One observation of an export job
///
/// The download URL is only present once the job reports `SUCCESSFUL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportProbe {
    pub status: JobStatus,
    pub download_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("SUBMITTED", false, false; "submitted is pending")]
    #[test_case("QUEUED_FOR_IMMEDIATE_EXECUTION", false, false; "queued is pending")]
    #[test_case("IN_PROGRESS", false, false; "in progress is pending")]
    #[test_case("SUCCESSFUL", true, false; "successful is terminal success")]
    #[test_case("FAILED", false, true; "failed is terminal failure")]
    #[test_case("FAILED_ROLLBACK_COMPLETED", false, true; "rollback completed is terminal failure")]
    #[test_case("SOMETHING_NEW", false, false; "unknown status is treated as pending")]
    fn test_status_classification(raw: &str, successful: bool, failure: bool) {
        let status = JobStatus::new(raw);
        assert_eq!(status.is_successful(), successful);
        assert_eq!(status.is_terminal_failure(), failure);
    }

    #[test]
    fn test_status_preserves_raw_string() {
        let status = JobStatus::new("QUEUED_FOR_IMMEDIATE_EXECUTION");
        assert_eq!(status.as_str(), "QUEUED_FOR_IMMEDIATE_EXECUTION");
        assert_eq!(status.to_string(), "QUEUED_FOR_IMMEDIATE_EXECUTION");
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(MigrationPhase::Export.to_string(), "export");
        assert_eq!(MigrationPhase::Import.to_string(), "import");
    }
}
