//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::analysis::scoring::AnalysisReport;
use crate::errors::AppError;
use crate::models::content::{ContentRequest, GeneratedContent};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: GeneratedContent,
    pub analysis: AnalysisReport,
}

/// POST /api/v1/content/generate
///
/// Generate → analyze → hand off to the sink. Only an empty topic is rejected;
/// provider failures fall through to template content.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = request.with_clamped_length();

    let content = state.orchestrator.generate(&request).await?;

    let analysis = state.scorer.analyze(
        &content.text,
        request.focus_keyword(),
        &state.config.site_origin,
    );
    info!(
        "Article {} scored {}/100 ({} issues, {} suggestions)",
        content.id,
        analysis.score,
        analysis.issues.len(),
        analysis.suggestions.len()
    );

    state
        .sink
        .store(&content, &analysis)
        .await
        .map_err(|e| AppError::Storage(format!("{e:#}")))?;

    Ok(Json(GenerateResponse { content, analysis }))
}
