//! Error handling module for the Campus CMS core.
//!
//! Provides centralized error types with mapping to HTTP status codes and
//! response envelopes for the gateway. Editor-facing errors carry a
//! human-readable message; nothing here is fatal to the shell.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const STORE_ERROR: &str = "STORE_ERROR";
    pub const SAVE_IN_FLIGHT: &str = "SAVE_IN_FLIGHT";
    pub const UPLOAD_FAILED: &str = "UPLOAD_FAILED";
    pub const AUTH_ERROR: &str = "AUTH_ERROR";
    pub const CHAT_UNAVAILABLE: &str = "CHAT_UNAVAILABLE";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Authentication required or rejected at the gateway
    Unauthorized(String),
    /// Resource not found
    NotFound(String),
    /// Malformed input
    BadRequest(String),
    /// Backing-store fetch or replace-all failure
    Store(String),
    /// A commit was attempted while one is already in flight for the editor
    SaveInFlight,
    /// Media upload failure
    Upload(String),
    /// Hosted auth service failure
    Auth(String),
    /// Chat collaborator failure
    Chat(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::BAD_GATEWAY,
            AppError::SaveInFlight => StatusCode::CONFLICT,
            AppError::Upload(_) => StatusCode::BAD_GATEWAY,
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::Chat(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => codes::UNAUTHORIZED,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::BadRequest(_) => codes::BAD_REQUEST,
            AppError::Store(_) => codes::STORE_ERROR,
            AppError::SaveInFlight => codes::SAVE_IN_FLIGHT,
            AppError::Upload(_) => codes::UPLOAD_FAILED,
            AppError::Auth(_) => codes::AUTH_ERROR,
            AppError::Chat(_) => codes::CHAT_UNAVAILABLE,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Unauthorized(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Store(msg) => msg.clone(),
            AppError::SaveInFlight => "A save is already in progress".to_string(),
            AppError::Upload(msg) => msg.clone(),
            AppError::Auth(msg) => msg.clone(),
            AppError::Chat(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Document decode error: {:?}", err);
        AppError::Store(format!("Malformed document: {}", err))
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// Error response envelope returned by the gateway.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}
