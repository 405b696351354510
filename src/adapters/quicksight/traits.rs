//! Capability traits for the export and import services
//!
//! The orchestrator depends on these seams only; production code plugs in
//! [`super::QuickSightClient`], tests plug in scripted mocks.

use super::models::{ExportRequest, ImportRequest};
use crate::domain::ids::AccountId;
use crate::domain::job::{ExportProbe, JobStatus};
use crate::domain::Result;
use async_trait::async_trait;

/// Starts and observes asset bundle export jobs in the source account
#[async_trait]
pub trait ExportService: Send + Sync {
    /// Submit an export job. Acceptance does not mean completion.
    async fn start_export(&self, request: &ExportRequest) -> Result<()>;

    /// Observe an export job's current status and, once successful, its
    /// time-limited download URL.
    async fn describe_export(&self, account_id: &AccountId, job_id: &str) -> Result<ExportProbe>;
}

/// Starts and observes asset bundle import jobs in the target account
#[async_trait]
pub trait ImportService: Send + Sync {
    /// Submit an import job referencing the relay storage object
    async fn start_import(&self, request: &ImportRequest) -> Result<()>;

    /// Observe an import job's current status
    async fn describe_import(&self, account_id: &AccountId, job_id: &str) -> Result<JobStatus>;
}
