//! HTTP transfer fetcher

use crate::domain::{DashportError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Retrieves bytes from the export job's download URL
#[async_trait]
pub trait TransferFetcher: Send + Sync {
    /// Fetch the complete payload into memory
    ///
    /// Bundles are small enough that a full in-memory read is fine; there is
    /// no streaming contract.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// reqwest-backed implementation of [`TransferFetcher`]
pub struct HttpTransferFetcher {
    client: reqwest::Client,
}

impl HttpTransferFetcher {
    /// Create a fetcher with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DashportError::Transfer(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl TransferFetcher for HttpTransferFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DashportError::Transfer(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DashportError::Transfer(format!(
                "Download failed with status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DashportError::Transfer(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_body_bytes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/bundle")
            .with_status(200)
            .with_body("DATA")
            .create_async()
            .await;

        let fetcher = HttpTransferFetcher::new(Duration::from_secs(5)).unwrap();
        let bytes = fetcher
            .fetch(&format!("{}/bundle", server.url()))
            .await
            .unwrap();

        assert_eq!(bytes, b"DATA");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_transfer_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/bundle")
            .with_status(403)
            .create_async()
            .await;

        let fetcher = HttpTransferFetcher::new(Duration::from_secs(5)).unwrap();
        let err = fetcher
            .fetch(&format!("{}/bundle", server.url()))
            .await
            .unwrap_err();

        assert!(matches!(err, DashportError::Transfer(_)));
        assert!(err.to_string().contains("403"));
    }

    #[tokio::test]
    async fn test_fetch_connection_error_is_transfer_error() {
        let fetcher = HttpTransferFetcher::new(Duration::from_secs(1)).unwrap();
        let err = fetcher
            .fetch("http://127.0.0.1:1/unreachable")
            .await
            .unwrap_err();
        assert!(matches!(err, DashportError::Transfer(_)));
    }
}
