//! Article sink: hand-off point for finished articles.
//!
//! Persistence belongs to the host system. This service only defines the
//! seam and ships `LogSink`, which records the hand-off and keeps nothing.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::analysis::scoring::AnalysisReport;
use crate::models::content::GeneratedContent;

/// Receives each generated article together with its analysis.
///
/// Carried in `AppState` as `Arc<dyn ArticleSink>`.
#[async_trait]
pub trait ArticleSink: Send + Sync {
    async fn store(&self, content: &GeneratedContent, report: &AnalysisReport) -> Result<()>;
}

/// Sink used when no host storage is wired in.
pub struct LogSink;

#[async_trait]
impl ArticleSink for LogSink {
    async fn store(&self, content: &GeneratedContent, report: &AnalysisReport) -> Result<()> {
        info!(
            "Article {} handed off: {} words from {} provider, score {}/100",
            content.id, content.word_count, content.source_provider, report.score
        );
        Ok(())
    }
}
