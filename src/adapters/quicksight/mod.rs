//! QuickSight asset bundle job adapter
//!
//! Export and import jobs are submitted against different accounts with
//! different credentials, so one [`QuickSightClient`] is built per account.

pub mod client;
pub mod models;
pub mod traits;

pub use client::QuickSightClient;
pub use models::{dashboard_arn, s3_uri, DashboardOverride, ExportRequest, ImportRequest};
pub use traits::{ExportService, ImportService};
