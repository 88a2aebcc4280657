//! Response types for the proxy.
//!
//! Upstream payloads are relayed as opaque bytes; only the status code and
//! content type are carried over.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};

/// Structured error body, used for locally detected failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// A successful upstream reply, ready to be forwarded unchanged.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let content_type = self
            .content_type
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
        response
    }
}

/// Turns an upstream reply into something the handler can forward.
///
/// Non-success statuses become [`AppError::UpstreamStatus`]; a body that
/// cannot be read becomes [`AppError::Upstream`].
pub async fn relay(response: reqwest::Response) -> AppResult<UpstreamResponse> {
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::UpstreamStatus(status));
    }

    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let body = response.bytes().await?;

    Ok(UpstreamResponse {
        status,
        content_type,
        body,
    })
}
