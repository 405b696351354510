//! Migration orchestration
//!
//! Drives one end-to-end dashboard migration to completion or failure. There
//! are no retries across the top-level job boundaries: a failed submission,
//! transfer or job aborts the whole run.

pub mod orchestrator;
pub mod poll;

pub use orchestrator::MigrationOrchestrator;
pub use poll::PollPolicy;
