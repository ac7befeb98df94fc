use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lexis_core::LexisError;
use serde::de::DeserializeOwned;
use serde_json::json;

/// Handler error mapped onto an HTTP status with a `{ "error": ... }` body
#[derive(Debug)]
pub enum ApiError {
    Lexis(LexisError),
    Unavailable(String),
    Internal(anyhow::Error),
}

impl From<LexisError> for ApiError {
    fn from(err: LexisError) -> Self {
        Self::Lexis(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Lexis(LexisError::InvalidInput(msg)) => (StatusCode::BAD_REQUEST, msg),
            Self::Lexis(LexisError::EntryNotFound(msg)) => {
                (StatusCode::NOT_FOUND, format!("entry not found: {msg}"))
            }
            Self::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            Self::Lexis(err) => {
                tracing::error!("Unhandled lexis error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
            Self::Internal(err) => {
                tracing::error!("Request failed: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Decode a JSON body, reporting malformed input as a 400
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| LexisError::InvalidInput(format!("invalid request body: {e}")).into())
}
