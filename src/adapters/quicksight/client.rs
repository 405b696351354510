//! QuickSight SDK client wrapper
//!
//! One client per account: the source account submits exports, the target
//! account submits imports. Credentials come straight from configuration as
//! static key pairs.

use super::models::{ExportRequest, ImportRequest};
use super::traits::{ExportService, ImportService};
use crate::config::AwsCredentials;
use crate::domain::ids::AccountId;
use crate::domain::job::{ExportProbe, JobStatus, MigrationPhase};
use crate::domain::{DashportError, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_quicksight::error::DisplayErrorContext;
use aws_sdk_quicksight::types::{
    AssetBundleExportFormat, AssetBundleImportJobDashboardOverrideParameters,
    AssetBundleImportJobOverrideParameters, AssetBundleImportSource,
};
use secrecy::ExposeSecret;

/// QuickSight client bound to one account's credentials
pub struct QuickSightClient {
    client: aws_sdk_quicksight::Client,
}

impl QuickSightClient {
    /// Create a client for the given region and static credentials
    pub async fn new(region: &str, credentials: &AwsCredentials) -> Self {
        let provider = Credentials::new(
            credentials.access_key_id.clone(),
            credentials.secret_access_key.expose_secret().as_ref().to_string(),
            None,
            None,
            "dashport",
        );
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(provider)
            .load()
            .await;

        Self {
            client: aws_sdk_quicksight::Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl ExportService for QuickSightClient {
    async fn start_export(&self, request: &ExportRequest) -> Result<()> {
        self.client
            .start_asset_bundle_export_job()
            .aws_account_id(request.account_id.as_str())
            .asset_bundle_export_job_id(&request.job_id)
            .set_resource_arns(Some(request.resource_arns.clone()))
            .include_all_dependencies(request.include_all_dependencies)
            .export_format(AssetBundleExportFormat::from(
                request.export_format.as_str(),
            ))
            .send()
            .await
            .map_err(|e| DashportError::Submission {
                phase: MigrationPhase::Export,
                message: format!("{}", DisplayErrorContext(e)),
            })?;

        Ok(())
    }

    async fn describe_export(&self, account_id: &AccountId, job_id: &str) -> Result<ExportProbe> {
        let output = self
            .client
            .describe_asset_bundle_export_job()
            .aws_account_id(account_id.as_str())
            .asset_bundle_export_job_id(job_id)
            .send()
            .await
            .map_err(|e| DashportError::StatusCheck {
                phase: MigrationPhase::Export,
                message: format!("{}", DisplayErrorContext(e)),
            })?;

        let status = output
            .job_status()
            .map(|s| JobStatus::new(s.as_str()))
            .unwrap_or_else(|| JobStatus::new("UNKNOWN"));

        Ok(ExportProbe {
            status,
            download_url: output.download_url().map(str::to_string),
        })
    }
}

#[async_trait]
impl ImportService for QuickSightClient {
    async fn start_import(&self, request: &ImportRequest) -> Result<()> {
        let source = AssetBundleImportSource::builder()
            .s3_uri(&request.source_s3_uri)
            .build();

        let dashboard_override = AssetBundleImportJobDashboardOverrideParameters::builder()
            .dashboard_id(request.dashboard_override.dashboard_id.as_str())
            .name(&request.dashboard_override.name)
            .build()
            .map_err(|e| DashportError::Submission {
                phase: MigrationPhase::Import,
                message: format!("Invalid dashboard override: {e}"),
            })?;

        let overrides = AssetBundleImportJobOverrideParameters::builder()
            .dashboards(dashboard_override)
            .build();

        self.client
            .start_asset_bundle_import_job()
            .aws_account_id(request.account_id.as_str())
            .asset_bundle_import_job_id(&request.job_id)
            .asset_bundle_import_source(source)
            .override_parameters(overrides)
            .send()
            .await
            .map_err(|e| DashportError::Submission {
                phase: MigrationPhase::Import,
                message: format!("{}", DisplayErrorContext(e)),
            })?;

        Ok(())
    }

    async fn describe_import(&self, account_id: &AccountId, job_id: &str) -> Result<JobStatus> {
        let output = self
            .client
            .describe_asset_bundle_import_job()
            .aws_account_id(account_id.as_str())
            .asset_bundle_import_job_id(job_id)
            .send()
            .await
            .map_err(|e| DashportError::StatusCheck {
                phase: MigrationPhase::Import,
                message: format!("{}", DisplayErrorContext(e)),
            })?;

        Ok(output
            .job_status()
            .map(|s| JobStatus::new(s.as_str()))
            .unwrap_or_else(|| JobStatus::new("UNKNOWN")))
    }
}
