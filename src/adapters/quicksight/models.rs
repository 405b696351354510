//! Request models for asset bundle jobs
//!
//! These are the capability contracts the orchestrator speaks, not wire
//! formats. The client module translates them into SDK calls.

use crate::domain::ids::{AccountId, DashboardId};

/// Fixed export format for asset bundles
pub const EXPORT_FORMAT: &str = "QUICKSIGHT_JSON";

/// Request to start an asset bundle export job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub account_id: AccountId,
    pub job_id: String,
    pub resource_arns: Vec<String>,
    pub include_all_dependencies: bool,
    pub export_format: String,
}

impl ExportRequest {
    /// Build an export request for a single dashboard and all its dependencies
    pub fn new(account_id: AccountId, job_id: impl Into<String>, resource_arn: String) -> Self {
        Self {
            account_id,
            job_id: job_id.into(),
            resource_arns: vec![resource_arn],
            include_all_dependencies: true,
            export_format: EXPORT_FORMAT.to_string(),
        }
    }
}

/// Rename override applied during import
///
/// Targets the original source dashboard ID while assigning the generated
/// name, so the imported dashboard keeps its identity but not its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOverride {
    pub dashboard_id: DashboardId,
    pub name: String,
}

/// Request to start an asset bundle import job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    pub account_id: AccountId,
    pub job_id: String,
    pub source_s3_uri: String,
    pub dashboard_override: DashboardOverride,
}

impl ImportRequest {
    pub fn new(
        account_id: AccountId,
        job_id: impl Into<String>,
        source_s3_uri: String,
        dashboard_override: DashboardOverride,
    ) -> Self {
        Self {
            account_id,
            job_id: job_id.into(),
            source_s3_uri,
            dashboard_override,
        }
    }
}

/// Fully-qualified resource locator for a dashboard
pub fn dashboard_arn(region: &str, account_id: &AccountId, dashboard_id: &DashboardId) -> String {
    format!(
        "arn:aws:quicksight:{region}:{account}:dashboard/{dashboard}",
        account = account_id.as_str(),
        dashboard = dashboard_id.as_str()
    )
}

/// S3 URI for the relay storage object
pub fn s3_uri(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}
