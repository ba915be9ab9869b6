//! Content Provider: the capability every content source implements.
//!
//! Providers share only this interface, not behavior. The orchestrator sees a
//! `ProviderResult` and nothing else about a provider's internals.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::content::{ContentRequest, ProviderKind};

/// Timeout applied to a hosted provider when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Why a single provider attempt produced nothing. Always recovered by the
/// orchestrator moving on; never surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderFailure {
    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("cancelled")]
    Cancelled,

    #[error("provider not configured")]
    NotConfigured,
}

/// Outcome of one provider attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderResult {
    Success { text: String },
    Failure { reason: ProviderFailure },
}

impl From<Result<String, ProviderFailure>> for ProviderResult {
    fn from(result: Result<String, ProviderFailure>) -> Self {
        match result {
            Ok(text) => ProviderResult::Success { text },
            Err(reason) => ProviderResult::Failure { reason },
        }
    }
}

/// A source of generated content.
///
/// Implementations must honor `timeout` and must not retry internally: a
/// failed attempt is reported once and the chain moves on.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT
    }

    /// `false` means the provider is skipped without being invoked.
    fn is_available(&self) -> bool {
        true
    }

    async fn try_generate(&self, request: &ContentRequest, timeout: Duration) -> ProviderResult;
}
