pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::generation::handlers::handle_generate;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/content/generate", post(handle_generate))
        .route("/api/v1/content/analyze", post(handle_analyze))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::Result;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::scoring::{AnalysisReport, RubricScorer};
    use crate::config::Config;
    use crate::generation::orchestrator::GenerationOrchestrator;
    use crate::models::content::GeneratedContent;
    use crate::storage::{ArticleSink, LogSink};

    struct BrokenSink;

    #[async_trait]
    impl ArticleSink for BrokenSink {
        async fn store(&self, _content: &GeneratedContent, _report: &AnalysisReport) -> Result<()> {
            anyhow::bail!("storage offline")
        }
    }

    fn test_config() -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            site_origin: "https://example.com".to_string(),
            primary_provider_url: None,
            primary_provider_timeout: Duration::from_secs(30),
            secondary_provider_url: None,
            secondary_provider_api_key: None,
            secondary_provider_timeout: Duration::from_secs(30),
        }
    }

    fn app_with_sink(sink: Arc<dyn ArticleSink>) -> Router {
        build_router(AppState {
            config: test_config(),
            orchestrator: Arc::new(GenerationOrchestrator::new(vec![])),
            scorer: Arc::new(RubricScorer),
            sink,
        })
    }

    fn app() -> Router {
        app_with_sink(Arc::new(LogSink))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_returns_content_and_analysis() {
        let (status, body) = post_json(
            app(),
            "/api/v1/content/generate",
            json!({"topic": "SEO", "keywords": ["ranking"], "length": 400}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"]["source_provider"], "template");
        assert_eq!(body["content"]["word_count"], 400);
        assert_eq!(body["content"]["language"], "en");
        assert!(body["analysis"]["score"].as_u64().unwrap() <= 100);
        assert!(body["analysis"]["metrics"]["heading_count"].as_u64().unwrap() >= 1);
    }

    #[tokio::test]
    async fn test_generate_clamps_length() {
        let (status, body) = post_json(
            app(),
            "/api/v1/content/generate",
            json!({"topic": "SEO", "length": 10}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"]["word_count"], 100);
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_topic() {
        let (status, body) =
            post_json(app(), "/api/v1/content/generate", json!({"topic": "  "})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "topic cannot be empty");
    }

    #[tokio::test]
    async fn test_generate_reports_sink_failure() {
        let (status, body) = post_json(
            app_with_sink(Arc::new(BrokenSink)),
            "/api/v1/content/generate",
            json!({"topic": "SEO"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "STORAGE_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_uses_configured_origin() {
        let text = r#"<h1>SEO</h1><p>SEO tips.</p>
            <a href="https://example.com/a">a</a><a href="/b">b</a><a href="https://moz.com">c</a>"#;
        let (status, body) = post_json(
            app(),
            "/api/v1/content/analyze",
            json!({"text": text, "keyword": "seo"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metrics"]["internal_link_count"], 2);
        assert_eq!(body["metrics"]["external_link_count"], 1);
    }

    #[tokio::test]
    async fn test_analyze_origin_override() {
        let text = r#"<a href="https://example.com/a">a</a>"#;
        let (_, body) = post_json(
            app(),
            "/api/v1/content/analyze",
            json!({"text": text, "keyword": "", "site_origin": "https://other.org"}),
        )
        .await;

        assert_eq!(body["metrics"]["internal_link_count"], 0);
        assert_eq!(body["metrics"]["external_link_count"], 1);
    }

    #[tokio::test]
    async fn test_analyze_empty_text() {
        let (status, body) =
            post_json(app(), "/api/v1/content/analyze", json!({"text": ""})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["metrics"]["word_count"], 0);
        assert!(!body["issues"].as_array().unwrap().is_empty());
    }
}
