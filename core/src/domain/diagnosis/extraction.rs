use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::domain::diagnosis::normalizer::{NormalizedDiagnosis, normalize};

static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON object pattern is valid"));

/// Removes markdown code fence markers, keeping the fenced content.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Returns the span from the first `{` to the last `}`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT.find(text).map(|m| m.as_str())
}

/// Parses model text that may wrap its JSON in prose or code fences.
pub fn parse_model_output(text: &str) -> Option<Value> {
    let cleaned = strip_code_fences(text);

    if let Ok(value) = serde_json::from_str::<Value>(&cleaned)
        && value.is_object()
    {
        return Some(value);
    }

    let candidate = extract_json_object(&cleaned)?;
    match serde_json::from_str::<Value>(candidate) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Extracted JSON candidate did not parse: {}", e);
            None
        }
    }
}

/// Normalizes raw model text; unreadable text yields the fallback response.
pub fn normalize_model_output(text: &str) -> NormalizedDiagnosis {
    match parse_model_output(text) {
        Some(value) => normalize(&value),
        None => {
            warn!("No JSON object found in model output");
            NormalizedDiagnosis::fallback()
        }
    }
}
