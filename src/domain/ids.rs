//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the identifiers a migration run
//! works with, plus the run identifiers derived from one shared random token.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// AWS account identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use dashport::domain::ids::AccountId;
/// use std::str::FromStr;
///
/// let account_id = AccountId::from_str("123456789012").unwrap();
/// assert_eq!(account_id.as_str(), "123456789012");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new AccountId from a string
    ///
    /// Returns `Ok(AccountId)` if the ID is non-empty, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Account ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Dashboard identifier newtype wrapper
///
/// The ID of the source dashboard being migrated. The import job reuses this
/// ID in its override so the dashboard is renamed rather than re-keyed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DashboardId(String);

impl DashboardId {
    /// Creates a new DashboardId from a string
    ///
    /// Returns `Ok(DashboardId)` if the ID is non-empty, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Dashboard ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DashboardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DashboardId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DashboardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The derived identifiers of one migration run
///
/// All four names share a single random 4-digit token so a run's artifacts
/// can be correlated by eye. The token is not checked for uniqueness across
/// runs and is not persisted anywhere; a collision with a previous run's
/// artifacts is a known failure mode.
///
/// # Examples
///
/// ```
/// use dashport::domain::ids::RunIdentifiers;
///
/// let run = RunIdentifiers::from_token(1234);
/// assert_eq!(run.export_job_id(), "export-job-1234");
/// assert_eq!(run.import_job_id(), "import-job-1234");
/// assert_eq!(run.dashboard_name(), "Dashboard-1234");
/// assert_eq!(run.storage_key(), "exports/asset-bundle-1234.qs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunIdentifiers {
    token: u16,
    export_job_id: String,
    import_job_id: String,
    dashboard_name: String,
    storage_key: String,
}

impl RunIdentifiers {
    /// Generate run identifiers from a fresh random token in [1000, 9999]
    pub fn generate() -> Self {
        Self::from_token(rand::thread_rng().gen_range(1000..=9999))
    }

    /// Build run identifiers from an explicit token
    pub fn from_token(token: u16) -> Self {
        Self {
            token,
            export_job_id: format!("export-job-{token}"),
            import_job_id: format!("import-job-{token}"),
            dashboard_name: format!("Dashboard-{token}"),
            storage_key: format!("exports/asset-bundle-{token}.qs"),
        }
    }

    /// The shared random token correlating this run's identifiers
    pub fn token(&self) -> u16 {
        self.token
    }

    pub fn export_job_id(&self) -> &str {
        &self.export_job_id
    }

    pub fn import_job_id(&self) -> &str {
        &self.import_job_id
    }

    /// The name the migrated dashboard receives in the target account
    pub fn dashboard_name(&self) -> &str {
        &self.dashboard_name
    }

    /// Object key for the bundle in relay storage
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_valid() {
        let id = AccountId::new("123456789012").unwrap();
        assert_eq!(id.as_str(), "123456789012");
        assert_eq!(id.to_string(), "123456789012");
    }

    #[test]
    fn test_account_id_empty_rejected() {
        assert!(AccountId::new("").is_err());
        assert!(AccountId::new("   ").is_err());
    }

    #[test]
    fn test_dashboard_id_valid() {
        let id = DashboardId::new("sales-overview").unwrap();
        assert_eq!(id.as_str(), "sales-overview");
    }

    #[test]
    fn test_dashboard_id_empty_rejected() {
        assert!(DashboardId::new("").is_err());
    }

    #[test]
    fn test_run_identifiers_share_one_token() {
        let run = RunIdentifiers::from_token(4242);
        assert_eq!(run.token(), 4242);
        assert_eq!(run.export_job_id(), "export-job-4242");
        assert_eq!(run.import_job_id(), "import-job-4242");
        assert_eq!(run.dashboard_name(), "Dashboard-4242");
        assert_eq!(run.storage_key(), "exports/asset-bundle-4242.qs");
    }

    #[test]
    fn test_generated_token_in_range() {
        for _ in 0..100 {
            let run = RunIdentifiers::generate();
            assert!(
                (1000..=9999).contains(&run.token()),
                "token {} out of range",
                run.token()
            );
        }
    }
}
