use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::render::RenderError;

/// Message shown when the trigger fires without a credential.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Please enter your API Key to begin.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing credential")]
    MissingCredential,

    #[error("{0}")]
    Generation(#[from] LlmError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status and stable machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::MissingCredential => (StatusCode::BAD_REQUEST, "MISSING_CREDENTIAL"),
            // Service and rendering failures are reported as one kind of failure.
            AppError::Generation(_) | AppError::Render(_) => {
                (StatusCode::BAD_GATEWAY, "GENERATION_FAILED")
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// The human-readable message surfaced to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingCredential => MISSING_CREDENTIAL_MESSAGE.to_string(),
            AppError::Generation(_) | AppError::Render(_) | AppError::Internal(_) => {
                format!("Error: {self}. Check if your API Key is valid and active.")
            }
        }
    }

    /// Logs the error at a level matching its kind. Never includes the credential.
    pub fn log(&self) {
        match self {
            AppError::MissingCredential => {
                tracing::warn!("Rejected request: {self}");
            }
            AppError::Generation(e) => tracing::error!("Generation error: {e}"),
            AppError::Render(e) => tracing::error!("Render error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, code) = self.status_and_code();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (status, body).into_response()
    }
}
