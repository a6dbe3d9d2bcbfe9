use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use crate::pipeline::ensure_scheme;
use super::models::EvaluateRequest;
use super::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "phishguard",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if req.url.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "URL cannot be empty"})),
        ));
    }

    let url = ensure_scheme(&req.url);
    match state.engine.evaluate(&url).await {
        Ok(verdict) => {
            let body = serde_json::to_value(&verdict).map_err(|e| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": e.to_string()})),
                )
            })?;
            Ok(Json(body))
        }
        // Only stage-1 (fatal) errors reach here; stage-2 failures are
        // folded into a degraded verdict by the engine.
        Err(e) => {
            let class = e.classify();
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": e.to_string(),
                    "error_type": class.error_type,
                })),
            ))
        }
    }
}
