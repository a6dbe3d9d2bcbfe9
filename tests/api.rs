use std::sync::Arc;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use phishguard::api::{build_router, AppState};
use phishguard::classifier::UrlClassifier;
use phishguard::config::EngineConfig;
use phishguard::content::ContentFetcher;
use phishguard::errors::PhishGuardError;
use phishguard::llm::LlmScorer;
use phishguard::models::{LlmScore, UrlFeatureVector, UrlVerdict};
use phishguard::pipeline::Engine;

struct StubClassifier {
    probability: f64,
    available: bool,
}

impl UrlClassifier for StubClassifier {
    fn classify(&self, _features: &UrlFeatureVector) -> Result<UrlVerdict, PhishGuardError> {
        if !self.available {
            return Err(PhishGuardError::ModelUnavailable("model not loaded".into()));
        }
        Ok(UrlVerdict::new(self.probability, 0.5))
    }
}

struct StubFetcher {
    page: String,
}

#[async_trait]
impl ContentFetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, PhishGuardError> {
        Ok(self.page.clone())
    }
}

struct StubLlm {
    score: f64,
}

#[async_trait]
impl LlmScorer for StubLlm {
    async fn score_text(&self, _page_text: &str) -> Result<LlmScore, PhishGuardError> {
        LlmScore::new(self.score)
    }

    fn model_name(&self) -> &str {
        "stub"
    }
}

fn test_state(probability: f64, available: bool) -> AppState {
    let engine = Engine::new(
        EngineConfig::default(),
        Arc::new(StubClassifier { probability, available }),
        Arc::new(StubFetcher { page: "<html><body>hello</body></html>".into() }),
        Arc::new(StubLlm { score: 0.2 }),
    );
    AppState { engine: Arc::new(engine) }
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, bytes))
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_router(test_state(0.05, true));
    let response = app.oneshot(make_request("GET", "/api/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "phishguard");
}

#[tokio::test]
async fn test_evaluate_legitimate_url() {
    let app = build_router(test_state(0.05, true));
    let response = app
        .oneshot(make_request(
            "POST",
            "/api/evaluate",
            Some(json!({"url": "https://example.com"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["label"], "legitimate");
    assert_eq!(body["combined_score"], 0.05);
    assert_eq!(body["degraded"], false);
}

#[tokio::test]
async fn test_evaluate_defaults_missing_scheme_to_https() {
    let app = build_router(test_state(0.05, true));
    let response = app
        .oneshot(make_request(
            "POST",
            "/api/evaluate",
            Some(json!({"url": "example.com"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["url"], "https://example.com");
}

#[tokio::test]
async fn test_evaluate_escalated_url_reports_factors() {
    let app = build_router(test_state(0.9, true));
    let response = app
        .oneshot(make_request(
            "POST",
            "/api/evaluate",
            Some(json!({"url": "https://suspect.example"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let factors = body["contributing_factors"].as_array().unwrap();
    assert_eq!(factors.len(), 3);
    assert_eq!(factors[0]["source"], "url_probability");
}

#[tokio::test]
async fn test_evaluate_rejects_empty_url() {
    let app = build_router(test_state(0.05, true));
    let response = app
        .oneshot(make_request("POST", "/api/evaluate", Some(json!({"url": "  "}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_evaluate_surfaces_fatal_stage_one_error() {
    let app = build_router(test_state(0.5, false));
    let response = app
        .oneshot(make_request(
            "POST",
            "/api/evaluate",
            Some(json!({"url": "https://example.com"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert_eq!(body["error_type"], "ModelUnavailable");
}

#[tokio::test]
async fn test_evaluate_unparseable_url_is_unprocessable() {
    let app = build_router(test_state(0.5, true));
    let response = app
        .oneshot(make_request(
            "POST",
            "/api/evaluate",
            Some(json!({"url": "http://"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert_eq!(body["error_type"], "UnparseableUrl");
}
