//! Migration configuration sourced from the process environment
//!
//! Every required value is a named environment variable. Validation collects
//! all missing names before failing so the operator sees the full list at
//! once, not one name per attempt.

use super::secret::{secret_string, SecretString};
use crate::domain::errors::DashportError;
use crate::domain::ids::{AccountId, DashboardId};
use crate::domain::result::Result;

/// Required environment variables, in the order they are checked
pub const REQUIRED_ENV_VARS: [&str; 9] = [
    "SOURCE_ACCOUNT_ID",
    "TARGET_ACCOUNT_ID",
    "SOURCE_DASHBOARD_ID",
    "S3_BUCKET",
    "AWS_REGION",
    "SOURCE_AWS_ACCESS_KEY",
    "SOURCE_AWS_SECRET_KEY",
    "TARGET_AWS_ACCESS_KEY",
    "TARGET_AWS_SECRET_KEY",
];

/// Default seconds between job status polls
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Default number of status polls per job before giving up
pub const DEFAULT_POLL_MAX_ATTEMPTS: u32 = 12;

/// A static credential pair for one account
#[derive(Debug, Clone)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: SecretString,
}

/// Configuration for one migration run
///
/// Created once at invocation start and never persisted.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    pub source_account_id: AccountId,
    pub target_account_id: AccountId,
    pub source_dashboard_id: DashboardId,
    pub s3_bucket: String,
    pub region: String,
    pub source_credentials: AwsCredentials,
    pub target_credentials: AwsCredentials,
    pub poll_interval_secs: u64,
    pub poll_max_attempts: u32,
}

impl MigrationConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`DashportError::MissingConfiguration`] listing every absent
    /// required variable, or [`DashportError::Configuration`] when a value is
    /// present but unusable.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an injectable lookup
    ///
    /// Tests pass a map-backed closure here so they never touch the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing: Vec<String> = Vec::new();
        let mut required = |name: &'static str| -> String {
            match lookup(name) {
                Some(value) => value,
                None => {
                    missing.push(name.to_string());
                    String::new()
                }
            }
        };

        // Read in REQUIRED_ENV_VARS order so the missing list is ordered too
        let source_account_id = required("SOURCE_ACCOUNT_ID");
        let target_account_id = required("TARGET_ACCOUNT_ID");
        let source_dashboard_id = required("SOURCE_DASHBOARD_ID");
        let s3_bucket = required("S3_BUCKET");
        let region = required("AWS_REGION");
        let source_access_key = required("SOURCE_AWS_ACCESS_KEY");
        let source_secret_key = required("SOURCE_AWS_SECRET_KEY");
        let target_access_key = required("TARGET_AWS_ACCESS_KEY");
        let target_secret_key = required("TARGET_AWS_SECRET_KEY");

        if !missing.is_empty() {
            tracing::error!(
                missing = ?missing,
                "Missing required environment variables"
            );
            return Err(DashportError::MissingConfiguration(missing));
        }

        let poll_interval_secs = optional_parsed(
            &lookup,
            "DASHPORT_POLL_INTERVAL_SECS",
            DEFAULT_POLL_INTERVAL_SECS,
        )?;
        let poll_max_attempts = optional_parsed(
            &lookup,
            "DASHPORT_POLL_MAX_ATTEMPTS",
            DEFAULT_POLL_MAX_ATTEMPTS,
        )?;

        Ok(Self {
            source_account_id: AccountId::new(source_account_id)
                .map_err(DashportError::Configuration)?,
            target_account_id: AccountId::new(target_account_id)
                .map_err(DashportError::Configuration)?,
            source_dashboard_id: DashboardId::new(source_dashboard_id)
                .map_err(DashportError::Configuration)?,
            s3_bucket,
            region,
            source_credentials: AwsCredentials {
                access_key_id: source_access_key,
                secret_access_key: secret_string(source_secret_key),
            },
            target_credentials: AwsCredentials {
                access_key_id: target_access_key,
                secret_access_key: secret_string(target_secret_key),
            },
            poll_interval_secs,
            poll_max_attempts,
        })
    }
}

/// Parse an optional override variable, falling back to a default
fn optional_parsed<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => raw.parse().map_err(|_| {
            DashportError::Configuration(format!("Invalid value for {name}: {raw}"))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn complete_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("SOURCE_ACCOUNT_ID", "111111111111"),
            ("TARGET_ACCOUNT_ID", "222222222222"),
            ("SOURCE_DASHBOARD_ID", "sales-overview"),
            ("S3_BUCKET", "relay-bucket"),
            ("AWS_REGION", "us-east-1"),
            ("SOURCE_AWS_ACCESS_KEY", "AKIASOURCE"),
            ("SOURCE_AWS_SECRET_KEY", "source-secret"),
            ("TARGET_AWS_ACCESS_KEY", "AKIATARGET"),
            ("TARGET_AWS_SECRET_KEY", "target-secret"),
        ])
    }

    fn lookup_in<'a>(env: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| env.get(name).map(|v| v.to_string())
    }

    #[test]
    fn test_complete_configuration_loads() {
        let env = complete_env();
        let config = MigrationConfig::from_lookup(lookup_in(&env)).unwrap();

        assert_eq!(config.source_account_id.as_str(), "111111111111");
        assert_eq!(config.target_account_id.as_str(), "222222222222");
        assert_eq!(config.source_dashboard_id.as_str(), "sales-overview");
        assert_eq!(config.s3_bucket, "relay-bucket");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.source_credentials.access_key_id, "AKIASOURCE");
        assert_eq!(
            config.source_credentials.secret_access_key.expose_secret().as_ref(),
            "source-secret"
        );
        assert_eq!(config.poll_interval_secs, DEFAULT_POLL_INTERVAL_SECS);
        assert_eq!(config.poll_max_attempts, DEFAULT_POLL_MAX_ATTEMPTS);
    }

    #[test]
    fn test_missing_variables_listed_in_check_order() {
        let mut env = complete_env();
        env.remove("TARGET_ACCOUNT_ID");
        env.remove("S3_BUCKET");
        env.remove("TARGET_AWS_SECRET_KEY");

        let err = MigrationConfig::from_lookup(lookup_in(&env)).unwrap_err();
        match err {
            DashportError::MissingConfiguration(missing) => {
                assert_eq!(
                    missing,
                    vec!["TARGET_ACCOUNT_ID", "S3_BUCKET", "TARGET_AWS_SECRET_KEY"]
                );
            }
            other => panic!("Expected MissingConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn test_all_variables_missing() {
        let err = MigrationConfig::from_lookup(|_| None).unwrap_err();
        match err {
            DashportError::MissingConfiguration(missing) => {
                assert_eq!(missing.len(), REQUIRED_ENV_VARS.len());
                let names: Vec<&str> = missing.iter().map(String::as_str).collect();
                assert_eq!(names, REQUIRED_ENV_VARS);
            }
            other => panic!("Expected MissingConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn test_poll_overrides_parsed() {
        let mut env = complete_env();
        env.insert("DASHPORT_POLL_INTERVAL_SECS", "2");
        env.insert("DASHPORT_POLL_MAX_ATTEMPTS", "30");

        let config = MigrationConfig::from_lookup(lookup_in(&env)).unwrap();
        assert_eq!(config.poll_interval_secs, 2);
        assert_eq!(config.poll_max_attempts, 30);
    }

    #[test]
    fn test_invalid_poll_override_rejected() {
        let mut env = complete_env();
        env.insert("DASHPORT_POLL_MAX_ATTEMPTS", "plenty");

        let err = MigrationConfig::from_lookup(lookup_in(&env)).unwrap_err();
        assert!(matches!(err, DashportError::Configuration(_)));
        assert!(err.to_string().contains("DASHPORT_POLL_MAX_ATTEMPTS"));
    }

    #[test]
    fn test_secret_not_in_debug_output() {
        let env = complete_env();
        let config = MigrationConfig::from_lookup(lookup_in(&env)).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("source-secret"));
        assert!(!debug.contains("target-secret"));
    }
}
