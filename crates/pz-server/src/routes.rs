//! HTTP routes over the dispatcher and the direct pipeline operations.

use crate::batch;
use crate::dispatch::{self, DispatchRequest};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/translate", post(translate))
        .route("/api/v1/expand", post(expand))
        .route("/api/v1/report", post(report))
        .route("/api/v1/batch", post(batch_translate))
        .route("/api/v1/dispatch", post(dispatch_action))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Deserialize)]
struct TranslateBody {
    text: String,
}

async fn translate(State(state): State<AppState>, Json(body): Json<TranslateBody>) -> Json<Value> {
    let t = state.translator.translate_to_compact(&body.text);
    Json(json!({ "status": "success", "notation": t.notation, "stats": t.stats }))
}

#[derive(Deserialize)]
struct ExpandBody {
    notation: String,
}

async fn expand(State(state): State<AppState>, Json(body): Json<ExpandBody>) -> Json<Value> {
    let text = state.translator.translate_to_expanded(&body.notation);
    Json(json!({ "status": "success", "text": text }))
}

#[derive(Deserialize)]
struct ReportBody {
    original: String,
    compressed: String,
}

async fn report(State(state): State<AppState>, Json(body): Json<ReportBody>) -> Json<Value> {
    let report = state.translator.compression_report(&body.original, &body.compressed);
    Json(json!({ "status": "success", "report": report }))
}

#[derive(Deserialize)]
struct BatchBody {
    items: Vec<String>,
}

async fn batch_translate(
    State(state): State<AppState>,
    Json(body): Json<BatchBody>,
) -> Json<Value> {
    let summary = batch::batch_translate(&state.translator, &body.items);
    Json(json!({
        "status": "success",
        "count": summary.results.len(),
        "results": summary.results,
        "total_original_tokens": summary.total_original_tokens,
        "total_final_tokens": summary.total_final_tokens,
        "mean_compression_ratio": summary.mean_compression_ratio,
    }))
}

async fn dispatch_action(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let request: DispatchRequest =
        serde_json::from_value(body).map_err(|err| ApiError::bad_request(err.to_string()))?;
    Ok(Json(dispatch::dispatch(&state.translator, &request)))
}
