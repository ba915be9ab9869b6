use std::sync::Arc;

use crate::analysis::scoring::ContentScorer;
use crate::config::Config;
use crate::generation::orchestrator::GenerationOrchestrator;
use crate::storage::ArticleSink;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Read-only after startup: concurrent requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub orchestrator: Arc<GenerationOrchestrator>,
    /// Pluggable scorer. Default: RubricScorer.
    pub scorer: Arc<dyn ContentScorer>,
    /// Host storage hand-off. Default: LogSink.
    pub sink: Arc<dyn ArticleSink>,
}
