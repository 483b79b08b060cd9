//! Named-action dispatcher over the translation pipeline.
//!
//! Every call returns a `{"status": "success" | "error", ...}` envelope;
//! failures are reported inside the envelope and never surface as panics.

use crate::batch;
use pz_core::{FieldTag, PzError};
use pz_translator::Translator;
use serde::Deserialize;
use serde_json::{json, Value};

pub const AVAILABLE_ACTIONS: &[&str] = &[
    "translate_to_compact",
    "translate_to_expanded",
    "compression_report",
    "batch_translate",
    "vocabulary",
];

#[derive(Debug, Clone, Deserialize)]
pub struct DispatchRequest {
    pub action: String,
    #[serde(default)]
    pub params: Value,
}

/// Run one named action and wrap the result in a status envelope.
pub fn dispatch(translator: &Translator, request: &DispatchRequest) -> Value {
    match run(translator, request) {
        Ok(body) => body,
        Err(PzError::UnknownAction { action }) => json!({
            "status": "error",
            "error": format!("Unknown action: {action}"),
            "available_actions": AVAILABLE_ACTIONS,
        }),
        Err(err) => json!({ "status": "error", "error": err.to_string() }),
    }
}

fn run(translator: &Translator, request: &DispatchRequest) -> pz_core::Result<Value> {
    match request.action.as_str() {
        "translate_to_compact" => {
            let text = str_param(&request.params, "text")?;
            let t = translator.translate_to_compact(text);
            Ok(json!({ "status": "success", "notation": t.notation, "stats": t.stats }))
        }
        "translate_to_expanded" => {
            let notation = str_param(&request.params, "notation")?;
            Ok(json!({ "status": "success", "text": translator.translate_to_expanded(notation) }))
        }
        "compression_report" => {
            let original = str_param(&request.params, "original")?;
            let compressed = str_param(&request.params, "compressed")?;
            let report = translator.compression_report(original, compressed);
            Ok(json!({ "status": "success", "report": report }))
        }
        "batch_translate" => {
            let items = list_param(&request.params, "items")?;
            let summary = batch::batch_translate(translator, &items);
            Ok(json!({
                "status": "success",
                "count": summary.results.len(),
                "results": summary.results,
                "total_original_tokens": summary.total_original_tokens,
                "total_final_tokens": summary.total_final_tokens,
                "mean_compression_ratio": summary.mean_compression_ratio,
            }))
        }
        "vocabulary" => Ok(json!({ "status": "success", "fields": vocabulary() })),
        other => Err(PzError::UnknownAction { action: other.to_string() }),
    }
}

fn str_param<'a>(params: &'a Value, key: &'static str) -> pz_core::Result<&'a str> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or(PzError::MissingParam(key))
}

fn list_param(params: &Value, key: &'static str) -> pz_core::Result<Vec<String>> {
    let items = params
        .get(key)
        .and_then(Value::as_array)
        .ok_or(PzError::MissingParam(key))?;
    Ok(items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect())
}

fn vocabulary() -> Value {
    Value::Array(
        FieldTag::ALL
            .iter()
            .map(|tag| json!({ "tag": tag.as_str(), "meaning": tag.describe() }))
            .collect(),
    )
}
