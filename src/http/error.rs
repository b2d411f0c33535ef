//! API error responses.
//!
//! Client errors use a `detail` payload: a list of `{type, loc, msg, input}`
//! entries for body validation failures, a plain string otherwise.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// One body validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationDetail {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<String>,
    pub msg: String,
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl ValidationDetail {
    /// The request carried no body at all.
    pub fn missing_body() -> Self {
        Self {
            kind: "missing",
            loc: vec!["body".to_string()],
            msg: "Field required".to_string(),
            input: Value::Null,
            ctx: None,
        }
    }

    /// The body was declared as JSON but did not parse.
    pub fn json_invalid(err: &serde_json::Error) -> Self {
        Self {
            kind: "json_invalid",
            loc: vec!["body".to_string()],
            msg: "JSON decode error".to_string(),
            input: json!({}),
            ctx: Some(json!({ "error": err.to_string() })),
        }
    }

    /// The body was not a JSON object (or not JSON at all).
    pub fn not_an_object(input: Value) -> Self {
        Self {
            kind: "model_attributes_type",
            loc: vec!["body".to_string()],
            msg: "Input should be a valid dictionary or object to extract fields from"
                .to_string(),
            input,
            ctx: None,
        }
    }

    /// A field held something other than a string.
    pub fn string_type(field: &str, input: Value) -> Self {
        Self {
            kind: "string_type",
            loc: vec!["body".to_string(), field.to_string()],
            msg: "Input should be a valid string".to_string(),
            input,
            ctx: None,
        }
    }
}

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request body failed validation ({} errors)", .0.len())]
    Validation(Vec<ValidationDetail>),

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn body(&self) -> Value {
        match self {
            ApiError::Validation(details) => json!({ "detail": details }),
            other => json!({ "detail": other.to_string() }),
        }
    }
}

impl From<ValidationDetail> for ApiError {
    fn from(detail: ValidationDetail) -> Self {
        ApiError::Validation(vec![detail])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Validation(details) = &self {
            let kinds: Vec<&str> = details.iter().map(|d| d.kind).collect();
            tracing::debug!(?kinds, "Rejected request body");
        }
        (self.status(), Json(self.body())).into_response()
    }
}
