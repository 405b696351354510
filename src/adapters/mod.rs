//! External collaborator adapters
//!
//! Each collaborator is a capability trait with a production implementation:
//!
//! - [`quicksight`] - asset bundle export/import jobs (`aws-sdk-quicksight`)
//! - [`s3`] - relay storage for the exported bundle (`aws-sdk-s3`)
//! - [`transfer`] - presigned URL download (`reqwest`)
//!
//! The orchestrator depends only on the traits, so tests substitute in-memory
//! implementations.

pub mod quicksight;
pub mod s3;
pub mod transfer;
