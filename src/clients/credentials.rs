//! Secret lookup against SSM Parameter Store

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_ssm::Client as SsmClient;
use tracing::info;

use crate::errors::RouterError;

/// Source of the upstream API key.
///
/// Implementations must look the value up on every call; nothing is cached
/// between invocations.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns `RouterError::CredentialError` describing why the lookup failed.
    async fn fetch(&self, name: &str) -> Result<String, RouterError>;
}

pub struct SsmCredentialProvider {
    client: SsmClient,
}

impl SsmCredentialProvider {
    #[must_use]
    pub fn new(client: SsmClient) -> Self {
        Self { client }
    }

    /// Builds an SSM client pinned to `region`, with credentials from the
    /// standard AWS provider chain.
    pub async fn for_region(region: &str) -> Self {
        let shared = aws_config::from_env()
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::new(SsmClient::new(&shared))
    }
}

#[async_trait]
impl CredentialProvider for SsmCredentialProvider {
    async fn fetch(&self, name: &str) -> Result<String, RouterError> {
        let resp = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await?;

        let value = resp
            .parameter
            .and_then(|param| param.value)
            .ok_or_else(|| RouterError::CredentialError(format!("parameter {name} has no value")))?;

        info!(parameter = %name, "Fetched API key from parameter store");
        Ok(value)
    }
}
