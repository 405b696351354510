//! Relay storage adapter
//!
//! The exported bundle is handed off to the import job through an S3 object
//! written once with the target account's credentials.

pub mod storage;

pub use storage::{RelayStorage, S3RelayStorage};
