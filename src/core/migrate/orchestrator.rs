//! Migration orchestrator
//!
//! Sequences the four external collaborators: request export, poll it, relay
//! the bundle through storage, request import, poll it. Everything runs on a
//! single logical task; the async runtime is only used for IO and the poll
//! sleeps, never for parallelism.

use crate::adapters::quicksight::{
    dashboard_arn, s3_uri, DashboardOverride, ExportRequest, ExportService, ImportRequest,
    ImportService, QuickSightClient,
};
use crate::adapters::s3::{RelayStorage, S3RelayStorage};
use crate::adapters::transfer::{HttpTransferFetcher, TransferFetcher};
use crate::config::MigrationConfig;
use crate::core::migrate::poll::{self, PollPolicy};
use crate::domain::ids::RunIdentifiers;
use crate::domain::job::MigrationPhase;
use crate::domain::{DashportError, MigrationResponse, Result};
use std::sync::Arc;
use std::time::Duration;

/// Timeout for the presigned URL download
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(120);

/// Migration orchestrator
///
/// Owns the run identifiers and the collaborator handles for exactly one
/// migration. There is no shared state across runs and no cleanup on failure:
/// artifacts already created (the relay object, a half-imported dashboard)
/// are left in place.
pub struct MigrationOrchestrator {
    config: MigrationConfig,
    run: RunIdentifiers,
    export_service: Arc<dyn ExportService>,
    import_service: Arc<dyn ImportService>,
    relay_storage: Arc<dyn RelayStorage>,
    fetcher: Arc<dyn TransferFetcher>,
    poll_policy: PollPolicy,
}

impl MigrationOrchestrator {
    /// Create an orchestrator with production collaborators
    ///
    /// Builds one QuickSight client per account, an S3 client with the target
    /// account's credentials, and an HTTP fetcher for the presigned URL.
    pub async fn from_config(config: MigrationConfig) -> Result<Self> {
        let export_service =
            Arc::new(QuickSightClient::new(&config.region, &config.source_credentials).await);
        let import_service =
            Arc::new(QuickSightClient::new(&config.region, &config.target_credentials).await);
        let relay_storage =
            Arc::new(S3RelayStorage::new(&config.region, &config.target_credentials).await);
        let fetcher = Arc::new(HttpTransferFetcher::new(TRANSFER_TIMEOUT)?);

        let poll_policy = PollPolicy::new(
            Duration::from_secs(config.poll_interval_secs),
            config.poll_max_attempts,
        );

        Ok(Self::new(
            config,
            export_service,
            import_service,
            relay_storage,
            fetcher,
            poll_policy,
        ))
    }

    /// Create an orchestrator with explicit collaborators
    pub fn new(
        config: MigrationConfig,
        export_service: Arc<dyn ExportService>,
        import_service: Arc<dyn ImportService>,
        relay_storage: Arc<dyn RelayStorage>,
        fetcher: Arc<dyn TransferFetcher>,
        poll_policy: PollPolicy,
    ) -> Self {
        Self {
            config,
            run: RunIdentifiers::generate(),
            export_service,
            import_service,
            relay_storage,
            fetcher,
            poll_policy,
        }
    }

    /// Replace the generated run identifiers with fixed ones
    pub fn with_run_identifiers(mut self, run: RunIdentifiers) -> Self {
        self.run = run;
        self
    }

    /// The identifiers of this run
    pub fn run_identifiers(&self) -> &RunIdentifiers {
        &self.run
    }

    /// Execute the migration
    ///
    /// This is the main entry point. It:
    /// 1. Submits the export job and polls it to completion
    /// 2. Downloads the bundle and writes it to relay storage
    /// 3. Submits the import job (renaming the dashboard) and polls it
    ///
    /// Success yields the structured 200 response; any fatal condition
    /// propagates as an error.
    pub async fn run(&self) -> Result<MigrationResponse> {
        tracing::info!(
            source_account_id = %self.config.source_account_id,
            target_account_id = %self.config.target_account_id,
            source_dashboard_id = %self.config.source_dashboard_id,
            s3_bucket = %self.config.s3_bucket,
            export_job_id = self.run.export_job_id(),
            import_job_id = self.run.import_job_id(),
            new_dashboard_name = self.run.dashboard_name(),
            storage_key = self.run.storage_key(),
            "Starting migration run"
        );

        self.request_export().await?;
        let download_url = self.await_export().await?;
        self.relay_bytes(&download_url).await?;
        self.request_import().await?;
        self.await_import().await?;

        tracing::info!("Migration completed successfully");
        Ok(MigrationResponse::success())
    }

    /// Submit the asset bundle export job
    async fn request_export(&self) -> Result<()> {
        let arn = dashboard_arn(
            &self.config.region,
            &self.config.source_account_id,
            &self.config.source_dashboard_id,
        );
        let request = ExportRequest::new(
            self.config.source_account_id.clone(),
            self.run.export_job_id(),
            arn,
        );

        tracing::info!(export_job_id = %request.job_id, "Starting asset bundle export job");
        if let Err(e) = self.export_service.start_export(&request).await {
            tracing::error!(error = %e, "Error starting asset bundle export job");
            return Err(e);
        }

        tracing::info!("Asset bundle export job started successfully");
        Ok(())
    }

    /// Poll the export job until it succeeds, then return the download URL
    async fn await_export(&self) -> Result<String> {
        tracing::info!("Waiting for export job to complete");

        let service = Arc::clone(&self.export_service);
        let account_id = self.config.source_account_id.clone();
        let job_id = self.run.export_job_id().to_string();

        let probe = poll::await_terminal(&self.poll_policy, MigrationPhase::Export, move || {
            let service = Arc::clone(&service);
            let account_id = account_id.clone();
            let job_id = job_id.clone();
            async move { service.describe_export(&account_id, &job_id).await }
        })
        .await?;

        probe.download_url.ok_or_else(|| {
            DashportError::Transfer(
                "Export job reported SUCCESSFUL without a download URL".to_string(),
            )
        })
    }

    /// Fetch the bundle from the download URL and write it to relay storage
    async fn relay_bytes(&self, download_url: &str) -> Result<()> {
        tracing::info!("Downloading file from presigned URL");
        let payload = match self.fetcher.fetch(download_url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, "Error downloading exported bundle");
                return Err(e);
            }
        };
        tracing::info!(bytes = payload.len(), "File downloaded successfully");

        tracing::info!(
            bucket = %self.config.s3_bucket,
            key = self.run.storage_key(),
            "Uploading file to relay storage"
        );
        if let Err(e) = self
            .relay_storage
            .put_object(&self.config.s3_bucket, self.run.storage_key(), payload)
            .await
        {
            tracing::error!(error = %e, "Error uploading bundle to relay storage");
            return Err(e);
        }

        tracing::info!("File uploaded successfully to relay storage");
        Ok(())
    }

    /// Submit the asset bundle import job
    ///
    /// The override targets the original source dashboard ID while assigning
    /// the generated name.
    async fn request_import(&self) -> Result<()> {
        let request = ImportRequest::new(
            self.config.target_account_id.clone(),
            self.run.import_job_id(),
            s3_uri(&self.config.s3_bucket, self.run.storage_key()),
            DashboardOverride {
                dashboard_id: self.config.source_dashboard_id.clone(),
                name: self.run.dashboard_name().to_string(),
            },
        );

        tracing::info!(import_job_id = %request.job_id, "Starting asset bundle import job");
        if let Err(e) = self.import_service.start_import(&request).await {
            tracing::error!(error = %e, "Error starting asset bundle import job");
            return Err(e);
        }

        tracing::info!("Asset bundle import job started successfully");
        Ok(())
    }

    /// Poll the import job until it succeeds
    async fn await_import(&self) -> Result<()> {
        tracing::info!("Waiting for import job to complete");

        let service = Arc::clone(&self.import_service);
        let account_id = self.config.target_account_id.clone();
        let job_id = self.run.import_job_id().to_string();

        poll::await_terminal(&self.poll_policy, MigrationPhase::Import, move || {
            let service = Arc::clone(&service);
            let account_id = account_id.clone();
            let job_id = job_id.clone();
            async move { service.describe_import(&account_id, &job_id).await }
        })
        .await?;

        Ok(())
    }
}
