//! S3-backed relay storage

use crate::config::AwsCredentials;
use crate::domain::{DashportError, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use secrecy::ExposeSecret;

/// Object store used as the hand-off medium between export and import
#[async_trait]
pub trait RelayStorage: Send + Sync {
    /// Write the payload verbatim to `bucket`/`key`
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()>;
}

/// S3 implementation of [`RelayStorage`]
pub struct S3RelayStorage {
    client: aws_sdk_s3::Client,
}

impl S3RelayStorage {
    /// Create a relay storage client for the given region and credentials
    ///
    /// Uses the target account's credentials: the bucket lives where the
    /// import job will read it.
    pub async fn new(region: &str, credentials: &AwsCredentials) -> Self {
        let provider = Credentials::new(
            credentials.access_key_id.clone(),
            credentials.secret_access_key.expose_secret().as_ref().to_string(),
            None,
            None,
            "dashport",
        );
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(provider)
            .load()
            .await;

        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl RelayStorage for S3RelayStorage {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| DashportError::Storage(format!("{}", DisplayErrorContext(e))))?;

        Ok(())
    }
}
