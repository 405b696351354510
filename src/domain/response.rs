//! Invocation result type
//!
//! The migration entry point returns a structured `{status, body}` response
//! on the two recoverable outcomes: success, and missing configuration. All
//! other fatal conditions propagate as errors instead.

use serde::Serialize;

/// Structured result of one migration invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationResponse {
    pub status: u16,
    pub body: String,
}

impl MigrationResponse {
    /// The migration completed end to end
    pub fn success() -> Self {
        Self {
            status: 200,
            body: "Assets transferred successfully".to_string(),
        }
    }

    /// Required configuration values were absent
    ///
    /// The body lists every missing name, in the order checked.
    pub fn missing_configuration(missing: &[String]) -> Self {
        Self {
            status: 400,
            body: format!("Missing required environment variables: {missing:?}"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DashportError;

    #[test]
    fn test_success_response() {
        let response = MigrationResponse::success();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "Assets transferred successfully");
        assert!(response.is_success());
    }

    #[test]
    fn test_missing_configuration_response() {
        let missing = vec!["S3_BUCKET".to_string(), "AWS_REGION".to_string()];
        let response = MigrationResponse::missing_configuration(&missing);
        assert_eq!(response.status, 400);
        assert_eq!(
            response.body,
            "Missing required environment variables: [\"S3_BUCKET\", \"AWS_REGION\"]"
        );
        assert!(!response.is_success());
    }

    #[test]
    fn test_response_body_matches_error_display() {
        // The 400 body and the configuration error must read identically
        let missing = vec!["S3_BUCKET".to_string()];
        let response = MigrationResponse::missing_configuration(&missing);
        let err = DashportError::MissingConfiguration(missing);
        assert_eq!(response.body, err.to_string());
    }

    #[test]
    fn test_response_serializes_to_json() {
        let response = MigrationResponse::success();
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            "{\"status\":200,\"body\":\"Assets transferred successfully\"}"
        );
    }
}
