//! Generation Orchestrator: walks the provider chain until one produces content.
//!
//! Chain: [Remote, Secondary] hosted providers in priority order, then the
//! local `TemplateProvider`. The template provider is held as a concrete type
//! with an infallible `render`, so `generate` cannot fail once validation passes.
//!
//! Providers run one at a time. An early success short-circuits the rest; a
//! failure is logged and the next provider is tried. A provider is never retried.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::generation::provider::{ContentProvider, ProviderFailure, ProviderResult};
use crate::generation::template::TemplateProvider;
use crate::models::content::{ContentRequest, GeneratedContent, GenerationError, ProviderKind};

/// Position of the orchestrator in the chain.
#[derive(Debug)]
enum ChainState {
    Trying(usize),
    Done(GeneratedContent),
}

pub struct GenerationOrchestrator {
    providers: Vec<Arc<dyn ContentProvider>>,
    fallback: TemplateProvider,
}

impl GenerationOrchestrator {
    /// `providers` are tried in the given order before the template fallback.
    pub fn new(providers: Vec<Arc<dyn ContentProvider>>) -> Self {
        Self {
            providers,
            fallback: TemplateProvider,
        }
    }

    pub async fn generate(&self, request: &ContentRequest) -> Result<GeneratedContent, GenerationError> {
        self.generate_with_cancel(request, &CancellationToken::new())
            .await
    }

    /// Like `generate`, but a cancelled `cancel` aborts the in-flight provider
    /// call and skips remaining hosted providers. Content is still produced.
    pub async fn generate_with_cancel(
        &self,
        request: &ContentRequest,
        cancel: &CancellationToken,
    ) -> Result<GeneratedContent, GenerationError> {
        request.validate()?;

        let mut state = ChainState::Trying(0);
        loop {
            state = match state {
                ChainState::Done(content) => {
                    info!(
                        "Generated {} words for topic {:?} via {} provider",
                        content.word_count, request.topic, content.source_provider
                    );
                    return Ok(content);
                }
                ChainState::Trying(index) => match self.providers.get(index) {
                    Some(provider) => self.attempt(provider.as_ref(), request, cancel, index).await,
                    None => {
                        let text = self.fallback.render(request);
                        ChainState::Done(GeneratedContent::new(
                            text,
                            ProviderKind::Template,
                            request.language,
                        ))
                    }
                },
            };
        }
    }

    async fn attempt(
        &self,
        provider: &dyn ContentProvider,
        request: &ContentRequest,
        cancel: &CancellationToken,
        index: usize,
    ) -> ChainState {
        let kind = provider.kind();

        if !provider.is_available() {
            debug!("Skipping {} provider: not configured", kind);
            return ChainState::Trying(index + 1);
        }

        if cancel.is_cancelled() {
            debug!("Skipping {} provider: generation cancelled", kind);
            return ChainState::Trying(index + 1);
        }

        let timeout = provider.timeout();
        match call_with_deadline(provider, request, timeout, cancel).await {
            ProviderResult::Success { text } => {
                ChainState::Done(GeneratedContent::new(text, kind, request.language))
            }
            ProviderResult::Failure { reason } => {
                warn!("{} provider failed for topic {:?}: {}", kind, request.topic, reason);
                ChainState::Trying(index + 1)
            }
        }
    }
}

/// Runs one provider attempt bounded by `timeout` and `cancel`, whichever comes first.
async fn call_with_deadline(
    provider: &dyn ContentProvider,
    request: &ContentRequest,
    timeout: Duration,
    cancel: &CancellationToken,
) -> ProviderResult {
    tokio::select! {
        _ = cancel.cancelled() => ProviderResult::Failure {
            reason: ProviderFailure::Cancelled,
        },
        outcome = tokio::time::timeout(timeout, provider.try_generate(request, timeout)) => {
            outcome.unwrap_or(ProviderResult::Failure {
                reason: ProviderFailure::Timeout(timeout),
            })
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::generation::remote::RemoteApiProvider;
    use crate::generation::secondary::SecondaryApiProvider;
    use crate::test_support::silent_endpoint;

    /// Fake provider with a scripted outcome and a call counter.
    struct ScriptedProvider {
        kind: ProviderKind,
        outcome: ProviderResult,
        available: bool,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(kind: ProviderKind, outcome: ProviderResult) -> Arc<Self> {
            Arc::new(Self {
                kind,
                outcome,
                available: true,
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            })
        }

        fn succeeding(kind: ProviderKind, text: &str) -> Arc<Self> {
            Self::new(
                kind,
                ProviderResult::Success {
                    text: text.to_string(),
                },
            )
        }

        fn failing(kind: ProviderKind, reason: ProviderFailure) -> Arc<Self> {
            Self::new(kind, ProviderResult::Failure { reason })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContentProvider for ScriptedProvider {
        fn kind(&self) -> ProviderKind {
            self.kind
        }

        fn timeout(&self) -> Duration {
            Duration::from_millis(100)
        }

        fn is_available(&self) -> bool {
            self.available
        }

        async fn try_generate(&self, _request: &ContentRequest, _timeout: Duration) -> ProviderResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.outcome.clone()
        }
    }

    fn chain(providers: &[Arc<ScriptedProvider>]) -> GenerationOrchestrator {
        GenerationOrchestrator::new(
            providers
                .iter()
                .map(|p| p.clone() as Arc<dyn ContentProvider>)
                .collect(),
        )
    }

    fn seo_request() -> ContentRequest {
        let mut req = ContentRequest::new("SEO");
        req.keywords = vec!["ranking".to_string()];
        req.length = 300;
        req
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let remote = ScriptedProvider::succeeding(ProviderKind::Remote, "Remote words here");
        let secondary = ScriptedProvider::succeeding(ProviderKind::Secondary, "Secondary words");

        let content = chain(&[remote.clone(), secondary.clone()])
            .generate(&seo_request())
            .await
            .unwrap();

        assert_eq!(content.source_provider, ProviderKind::Remote);
        assert_eq!(content.text, "Remote words here");
        assert_eq!(content.word_count, 3);
        assert_eq!(remote.calls(), 1);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_failure_advances_to_next_provider_without_retry() {
        let remote = ScriptedProvider::failing(
            ProviderKind::Remote,
            ProviderFailure::Malformed("no content field".into()),
        );
        let secondary = ScriptedProvider::succeeding(ProviderKind::Secondary, "Secondary words");

        let content = chain(&[remote.clone(), secondary.clone()])
            .generate(&seo_request())
            .await
            .unwrap();

        assert_eq!(content.source_provider, ProviderKind::Secondary);
        assert_eq!(remote.calls(), 1);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_all_hosted_failures_fall_back_to_template() {
        let remote = ScriptedProvider::failing(ProviderKind::Remote, ProviderFailure::Status(503));
        let secondary = ScriptedProvider::failing(
            ProviderKind::Secondary,
            ProviderFailure::Transport("connection reset".into()),
        );

        let content = chain(&[remote.clone(), secondary.clone()])
            .generate(&seo_request())
            .await
            .unwrap();

        assert_eq!(content.source_provider, ProviderKind::Template);
        assert_eq!(content.word_count, 300);
        assert!(content.text.contains("SEO"));
        assert_eq!(remote.calls(), 1);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_provider_is_never_invoked() {
        let secondary = Arc::new(ScriptedProvider {
            kind: ProviderKind::Secondary,
            outcome: ProviderResult::Success {
                text: "should not be used".into(),
            },
            available: false,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        });

        let content = chain(&[secondary.clone()])
            .generate(&seo_request())
            .await
            .unwrap();

        assert_eq!(content.source_provider, ProviderKind::Template);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_slow_provider_is_timed_out() {
        let slow = Arc::new(ScriptedProvider {
            kind: ProviderKind::Remote,
            outcome: ProviderResult::Success {
                text: "too late".into(),
            },
            available: true,
            delay: Duration::from_secs(10),
            calls: AtomicUsize::new(0),
        });

        let content = chain(&[slow.clone()])
            .generate(&seo_request())
            .await
            .unwrap();

        assert_eq!(content.source_provider, ProviderKind::Template);
        assert_eq!(slow.calls(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_generation_skips_hosted_providers() {
        let remote = ScriptedProvider::succeeding(ProviderKind::Remote, "Remote words");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let content = chain(&[remote.clone()])
            .generate_with_cancel(&seo_request(), &cancel)
            .await
            .unwrap();

        assert_eq!(content.source_provider, ProviderKind::Template);
        assert_eq!(remote.calls(), 0);
    }

    #[tokio::test]
    async fn test_cancel_aborts_in_flight_call_and_moves_on() {
        let slow = Arc::new(ScriptedProvider {
            kind: ProviderKind::Remote,
            outcome: ProviderResult::Success {
                text: "too late".into(),
            },
            available: true,
            delay: Duration::from_secs(10),
            calls: AtomicUsize::new(0),
        });
        let secondary = ScriptedProvider::succeeding(ProviderKind::Secondary, "never reached");

        let orchestrator = chain(&[slow.clone(), secondary.clone()]);
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let content = orchestrator
            .generate_with_cancel(&seo_request(), &cancel)
            .await
            .unwrap();

        assert_eq!(content.source_provider, ProviderKind::Template);
        assert_eq!(slow.calls(), 1);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_topic_rejected_before_any_provider() {
        let remote = ScriptedProvider::succeeding(ProviderKind::Remote, "Remote words");
        let result = chain(&[remote.clone()])
            .generate(&ContentRequest::new("  "))
            .await;

        assert_eq!(result.unwrap_err(), GenerationError::EmptyTopic);
        assert_eq!(remote.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_chain_uses_template() {
        let content = GenerationOrchestrator::new(vec![])
            .generate(&seo_request())
            .await
            .unwrap();
        assert_eq!(content.source_provider, ProviderKind::Template);
        assert!(content.word_count > 0);
    }

    #[tokio::test]
    async fn test_unreachable_hosted_providers_fall_back_to_template() {
        let timeout = Duration::from_millis(200);
        let remote = RemoteApiProvider::new(Some(silent_endpoint().await), timeout).unwrap();
        let secondary = SecondaryApiProvider::new(
            Some(silent_endpoint().await),
            Some("sk-test".to_string()),
            timeout,
        )
        .unwrap();

        let orchestrator = GenerationOrchestrator::new(vec![Arc::new(remote), Arc::new(secondary)]);
        let content = orchestrator.generate(&seo_request()).await.unwrap();

        assert_eq!(content.source_provider, ProviderKind::Template);
        assert!(content.word_count > 0);
        assert!(content.text.contains("ranking"));
    }

    #[tokio::test]
    async fn test_hosted_success_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r###"{"data": {"content": "## SEO\n\nHosted ranking advice."}}"###)
            .create_async()
            .await;

        let remote = RemoteApiProvider::new(Some(server.url()), Duration::from_secs(5)).unwrap();
        let content = GenerationOrchestrator::new(vec![Arc::new(remote)])
            .generate(&seo_request())
            .await
            .unwrap();

        assert_eq!(content.source_provider, ProviderKind::Remote);
        assert_eq!(content.word_count, 4);
    }
}
