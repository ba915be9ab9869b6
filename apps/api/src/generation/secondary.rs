//! Fallback hosted AI provider, authenticated with an API key.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::api_client::ContentApiClient;
use crate::generation::provider::{ContentProvider, ProviderFailure, ProviderResult};
use crate::models::content::{ContentRequest, ProviderKind};

/// Second provider in the chain. Only available when both an endpoint and a
/// credential are configured; otherwise the chain skips it without a call.
pub struct SecondaryApiProvider {
    client: Option<ContentApiClient>,
    timeout: Duration,
}

impl SecondaryApiProvider {
    pub fn new(endpoint: Option<String>, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        let client = match (endpoint, api_key) {
            (Some(url), Some(key)) => Some(ContentApiClient::new(url, Some(key))?),
            _ => None,
        };
        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl ContentProvider for SecondaryApiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Secondary
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
