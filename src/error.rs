//! Error types and error handling for the application
//!
//! `AppError` is what handlers return. Its `IntoResponse` impl sets the HTTP
//! status and attaches an [`ErrorDetail`] to the response; the error envelope
//! middleware (`api::middleware::error_envelope`) turns that detail into the
//! uniform JSON error body, adding the request path, method and timestamp.

use crate::api::ids::IdsError;
use crate::services::CompareError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The `ids` query parameter is missing or malformed
    #[error(transparent)]
    InvalidIds(#[from] IdsError),

    /// The comparison engine rejected the request
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// No route matches the request
    #[error("Cannot {method} {path}")]
    RouteNotFound {
        /// Request method
        method: String,
        /// Request path
        path: String,
    },
}

/// Error payload carried from `AppError` to the error envelope middleware
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    /// Human-readable message, a string or an array of strings
    pub message: Value,
    /// Short error label, e.g. "Bad Request"
    pub error: String,
    /// Extra fields set by the failing operation, copied verbatim
    pub extra: Map<String, Value>,
}

impl ErrorDetail {
    /// Build the uniform error body for a failed request
    pub fn into_body(self, status: StatusCode, method: &str, path: &str) -> Value {
        let mut body = Map::new();
        body.insert("statusCode".to_string(), json!(status.as_u16()));
        body.insert(
            "timestamp".to_string(),
            json!(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        body.insert("path".to_string(), json!(path));
        body.insert("method".to_string(), json!(method));
        body.insert("message".to_string(), self.message);
        body.insert("error".to_string(), json!(self.error));
        body.extend(self.extra);
        Value::Object(body)
    }

    /// Message as a single line, for logging
    pub fn message_text(&self) -> String {
        match &self.message {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string).unwrap_or_else(|| item.to_string()))
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}

impl AppError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidIds(_) => StatusCode::BAD_REQUEST,
            AppError::Compare(CompareError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Message, label and extra fields for the error body
    pub fn detail(&self) -> ErrorDetail {
        let status = self.status_code();
        let label = status.canonical_reason().unwrap_or("Error").to_string();
        let mut extra = Map::new();

        let message = match self {
            // Validation failures are reported as a list of messages
            AppError::InvalidIds(e) => json!([e.to_string()]),
            AppError::Compare(CompareError::NotFound { requested_ids }) => {
                extra.insert("requestedIds".to_string(), json!(requested_ids));
                json!(self.to_string())
            }
            AppError::RouteNotFound { .. } => json!(self.to_string()),
        };

        ErrorDetail {
            message,
            error: label,
            extra,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.detail();

        // Body without request context; replaced by the error envelope middleware
        let mut body = Map::new();
        body.insert("statusCode".to_string(), json!(status.as_u16()));
        body.insert("message".to_string(), detail.message.clone());
        body.insert("error".to_string(), json!(detail.error));
        body.extend(detail.extra.clone());

        let mut response = (status, Json(Value::Object(body))).into_response();
        response.extensions_mut().insert(detail);
        response
    }
}
