//! Domain models and types for Dashport.
//!
//! This module contains the core domain types for one migration run.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`AccountId`], [`DashboardId`])
//! - **Run identifiers** ([`RunIdentifiers`]) - the derived names sharing one run token
//! - **Job types** ([`JobStatus`], [`ExportProbe`], [`MigrationPhase`])
//! - **Error types** ([`DashportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Dashport uses the newtype pattern for identifiers to prevent mixing
//! different ID types:
//!
//! ```rust
//! use dashport::domain::{AccountId, DashboardId};
//!
//! # fn example() -> Result<(), String> {
//! let account_id = AccountId::new("123456789012")?;
//! let dashboard_id = DashboardId::new("sales-dashboard")?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: AccountId = dashboard_id;  // Compile error!
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod job;
pub mod response;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::DashportError;
pub use ids::{AccountId, DashboardId, RunIdentifiers};
pub use job::{ExportProbe, JobStatus, MigrationPhase};
pub use response::MigrationResponse;
pub use result::Result;
