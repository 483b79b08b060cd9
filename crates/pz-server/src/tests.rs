use crate::batch::batch_translate;
use crate::dispatch::{dispatch, DispatchRequest, AVAILABLE_ACTIONS};
use crate::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use pz_translator::Translator;
use serde_json::{json, Value};
use tower::ServiceExt;

fn request(action: &str, params: Value) -> DispatchRequest {
    DispatchRequest { action: action.to_string(), params }
}

// ========== Dispatch ==========

#[test]
fn test_dispatch_translate() {
    let translator = Translator::default();
    let result = dispatch(
        &translator,
        &request("translate_to_compact", json!({ "text": "Please write a Python script." })),
    );
    assert_eq!(result["status"], "success");
    assert_eq!(result["notation"], "OBJ:Script");
    assert!(result["stats"]["compression_ratio"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_dispatch_expand() {
    let translator = Translator::default();
    let result = dispatch(
        &translator,
        &request("translate_to_expanded", json!({ "notation": "ACT:Dev OBJ:Write_Code" })),
    );
    assert_eq!(result["status"], "success");
    let text = result["text"].as_str().unwrap();
    assert!(text.contains("Dev"));
    assert!(text.contains("Write_Code"));
}

#[test]
fn test_dispatch_report() {
    let translator = Translator::default();
    let result = dispatch(
        &translator,
        &request(
            "compression_report",
            json!({ "original": "one two three four", "compressed": "one two" }),
        ),
    );
    assert_eq!(result["status"], "success");
    assert_eq!(result["report"]["word_reduction_pct"], 50.0);
}

#[test]
fn test_dispatch_batch() {
    let translator = Translator::default();
    let result = dispatch(
        &translator,
        &request(
            "batch_translate",
            json!({ "items": ["Write a Python script", "Create a database schema", "Design an API"] }),
        ),
    );
    assert_eq!(result["status"], "success");
    assert_eq!(result["count"], 3);
    assert_eq!(result["results"].as_array().unwrap().len(), 3);
}

#[test]
fn test_dispatch_vocabulary() {
    let translator = Translator::default();
    let result = dispatch(&translator, &request("vocabulary", Value::Null));
    assert_eq!(result["status"], "success");
    let fields = result["fields"].as_array().unwrap();
    assert!(fields.iter().any(|f| f["tag"] == "ACT"));
    assert!(fields.iter().any(|f| f["tag"] == "RATIO"));
}

#[test]
fn test_dispatch_unknown_action() {
    let translator = Translator::default();
    let result = dispatch(&translator, &request("invalid_action", Value::Null));
    assert_eq!(result["status"], "error");
    let listed = result["available_actions"].as_array().unwrap();
    assert_eq!(listed.len(), AVAILABLE_ACTIONS.len());
}

#[test]
fn test_dispatch_missing_param() {
    let translator = Translator::default();
    let result = dispatch(&translator, &request("translate_to_compact", json!({})));
    assert_eq!(result["status"], "error");
    assert!(result["error"].as_str().unwrap().contains("text"));
}

#[test]
fn test_dispatch_never_panics_on_empty_text() {
    let translator = Translator::default();
    let result = dispatch(&translator, &request("translate_to_compact", json!({ "text": "" })));
    assert_eq!(result["status"], "success");
    assert_eq!(result["stats"]["compression_ratio"], 100.0);
}

// ========== Batch ==========

#[test]
fn test_batch_ordering_and_totals() {
    let translator = Translator::default();
    let prompts = vec![
        "Write a Python script".to_string(),
        "Create a database schema".to_string(),
        "Summarize the document".to_string(),
    ];
    let summary = batch_translate(&translator, &prompts);
    assert_eq!(summary.results.len(), 3);
    assert!(summary.total_original_tokens > 0);
    for item in &summary.results {
        assert!(item.stats.original_tokens > 0);
    }
}

#[test]
fn test_batch_empty() {
    let translator = Translator::default();
    let summary = batch_translate(&translator, &[]);
    assert!(summary.results.is_empty());
    assert_eq!(summary.total_original_tokens, 0);
    assert_eq!(summary.mean_compression_ratio, 0.0);
}

#[test]
fn test_batch_items_independent() {
    let translator = Translator::default();
    let single = batch_translate(&translator, &["Write a Python script".to_string()]);
    let paired = batch_translate(
        &translator,
        &["Something else first".to_string(), "Write a Python script".to_string()],
    );
    assert_eq!(single.results[0].notation, paired.results[1].notation);
}

// ========== Routes ==========

#[tokio::test]
async fn test_health_route() {
    let app = crate::app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_translate_route() {
    let app = crate::app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/translate")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"text":"Please write a Python script."}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["notation"], "OBJ:Script");
}

#[tokio::test]
async fn test_dispatch_route_unknown_action() {
    let app = crate::app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/dispatch")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"action":"nope"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["status"], "error");
    assert!(value["available_actions"].is_array());
}

#[tokio::test]
async fn test_dispatch_route_malformed_body() {
    let app = crate::app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/dispatch")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"params":{}}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_custom_state_translator() {
    let state = AppState::with_translator(Translator::aggressive());
    let app = crate::app_with_state(state);
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/translate")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"text":"Deploy the service to the cluster region"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(!value["notation"].as_str().unwrap().contains("the "));
}
