//! Primary hosted AI provider.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::api_client::ContentApiClient;
use crate::generation::provider::{ContentProvider, ProviderFailure, ProviderResult};
use crate::models::content::{ContentRequest, ProviderKind};

/// First provider in the chain. Unavailable when no endpoint is configured.
pub struct RemoteApiProvider {
    client: Option<ContentApiClient>,
    timeout: Duration,
}

impl RemoteApiProvider {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self> {
        let client = endpoint
            .map(|url| ContentApiClient::new(url, None))
            .transpose()?;
        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl ContentProvider for RemoteApiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Remote
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn is_available(&self) -> bool {
        self.client.is_some()
    }

    async fn try_generate(&self, request: &ContentRequest, timeout: Duration) -> ProviderResult {
        match &self.client {
            Some(client) => client.generate(request, timeout).await.into(),
            None => ProviderResult::Failure {
                reason: ProviderFailure::NotConfigured,
            },
        }
    }
}
