//! Content API Client: the single point of entry for calls to hosted AI content services.
//!
//! ARCHITECTURAL RULE: providers never build HTTP requests themselves.
//! Wire format, timeouts and response classification live here.
//!
//! No retries: a failed call is reported once and the provider chain moves on.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::analysis::metrics::word_count;
use crate::generation::provider::ProviderFailure;
use crate::models::content::ContentRequest;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Success shapes, probed in order; the first one carrying words wins.
const CONTENT_POINTERS: &[&str] = &["/content", "/data/content"];

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    topic: &'a str,
    keywords: String,
    length: u32,
    #[serde(rename = "type")]
    content_type: &'a str,
    language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    audience: Option<&'a str>,
}

impl<'a> From<&'a ContentRequest> for GenerateBody<'a> {
    fn from(request: &'a ContentRequest) -> Self {
        Self {
            topic: &request.topic,
            keywords: request.keywords_joined(),
            length: request.length,
            content_type: request.content_type.as_str(),
            language: request.language.as_str(),
            audience: request.audience.as_deref(),
        }
    }
}

/// Classification of a 200 response body.
#[derive(Debug, PartialEq, Eq)]
pub enum ResponseShape {
    Content(String),
    Malformed(String),
}

impl ResponseShape {
    pub fn classify(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(e) => return ResponseShape::Malformed(format!("invalid JSON: {e}")),
        };

        CONTENT_POINTERS
            .iter()
            .filter_map(|pointer| value.pointer(pointer).and_then(Value::as_str))
            .find(|text| word_count(text) > 0)
            .map(|text| ResponseShape::Content(text.trim().to_string()))
            .unwrap_or_else(|| ResponseShape::Malformed("no content field".to_string()))
    }
}

/// HTTP client bound to one content endpoint.
#[derive(Clone)]
pub struct ContentApiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ContentApiClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// POSTs the request and returns the content text, or the reason there is none.
    pub async fn generate(
        &self,
        request: &ContentRequest,
        timeout: Duration,
    ) -> Result<String, ProviderFailure> {
        let mut builder = self
            .client
            .post(&self.endpoint)
            .timeout(timeout)
            .header(CONTENT_TYPE, "application/json")
            .json(&GenerateBody::from(request));

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| transport_failure(e, timeout))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            debug!("Content API {} returned {}: {}", self.endpoint, status, body);
            return Err(ProviderFailure::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_failure(e, timeout))?;

        match ResponseShape::classify(&body) {
            ResponseShape::Content(text) => Ok(text),
            ResponseShape::Malformed(reason) => Err(ProviderFailure::Malformed(reason)),
        }
    }
}

fn transport_failure(error: reqwest::Error, timeout: Duration) -> ProviderFailure {
    if error.is_timeout() {
        ProviderFailure::Timeout(timeout)
    } else {
        ProviderFailure::Transport(error.to_string())
    }
}
