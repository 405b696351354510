//! Configuration management
//!
//! All migration settings come from the process environment (optionally via a
//! `.env` file loaded at startup). Credentials are wrapped in [`SecretString`]
//! so they never appear in debug output and are zeroized on drop.

pub mod schema;
pub mod secret;

pub use schema::{
    AwsCredentials, MigrationConfig, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_POLL_MAX_ATTEMPTS,
    REQUIRED_ENV_VARS,
};
pub use secret::{secret_string, SecretString, SecretValue};
