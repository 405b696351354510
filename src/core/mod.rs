//! Business logic
//!
//! The only component here is the migration orchestrator and its poll loop.

pub mod migrate;
