//! Error types shared by the proxy handlers.
//!
//! Every failure is turned into an HTTP response here, so nothing that goes
//! wrong upstream can take the process down.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorMessage;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The caller did not send `Authorization: Bearer <token>`.
    #[error("Token is required")]
    MissingToken,

    /// The upstream answered with a non-success status.
    #[error("Request failed with status code {}", .0.as_u16())]
    UpstreamStatus(StatusCode),

    /// The upstream could not be reached or its body could not be read.
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::UpstreamStatus(status) => *status,
            AppError::Upstream(e) => e.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            AppError::MissingToken => {
                tracing::warn!("rejected request without bearer token");
                (status, Json(ErrorMessage::new(self.to_string()))).into_response()
            }
            AppError::UpstreamStatus(_) | AppError::Upstream(_) => {
                tracing::error!(status = status.as_u16(), error = %self, "Aurora Vision API call failed");
                (status, self.to_string()).into_response()
            }
        }
    }
}
