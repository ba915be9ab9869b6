//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::scoring::AnalysisReport;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub keyword: String,
    /// Overrides the configured site origin for link classification.
    pub site_origin: Option<String>,
}

/// POST /api/v1/content/analyze
///
/// Scores arbitrary text (generated or user-authored). Always succeeds.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalysisReport> {
    let origin = request
        .site_origin
        .as_deref()
        .unwrap_or(&state.config.site_origin);

    Json(state.scorer.analyze(&request.text, &request.keyword, origin))
}
