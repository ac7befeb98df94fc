use std::sync::Arc;

use anyhow::Context;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use lexis_core::LexisError;
use lexis_core::types::VocabCandidate;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, parse_body};
use crate::state::AppState;

/// Fields stay untyped so wrong JSON types surface as a 400 with a clear message
#[derive(Deserialize)]
pub struct VocabRequest {
    content: Option<Value>,
    text: Option<Value>,
    threshold: Option<Value>,
}

pub async fn extract_vocab(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<VocabCandidate>>, ApiError> {
    let request: VocabRequest = parse_body(&body)?;

    // `content` wins unless blank, then `text` is tried
    let content = request.content.filter(|value| !is_blank(value)).or(request.text);
    let text = match content {
        Some(Value::String(text)) if !text.trim().is_empty() => text,
        Some(Value::String(_)) | None | Some(Value::Null) => {
            return Err(invalid("content is required"));
        }
        Some(_) => return Err(invalid("content must be a string")),
    };

    let threshold = match request.threshold {
        None | Some(Value::Null) => state.config.vocab.threshold,
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| invalid("threshold must be a number"))?,
        Some(_) => return Err(invalid("threshold must be a number")),
    };

    let extractor = Arc::clone(&state.vocab);
    let candidates = tokio::task::spawn_blocking(move || extractor.extract(&text, threshold))
        .await
        .context("Vocabulary extraction task failed")??;

    Ok(Json(candidates))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

fn invalid(message: &str) -> ApiError {
    LexisError::InvalidInput(message.to_string()).into()
}
