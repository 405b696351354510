//! Transfer fetcher adapter
//!
//! Downloads the exported bundle from the time-limited URL the export job
//! yields on success.

pub mod fetcher;

pub use fetcher::{HttpTransferFetcher, TransferFetcher};
