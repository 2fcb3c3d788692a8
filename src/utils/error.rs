//! Unified error handling
//!
//! Every request-level failure maps onto one [`AppError`] variant, which in
//! turn maps onto a single HTTP status and a stable machine-readable kind.
//!
//! | Variant | Status |
//! |---------|--------|
//! | `Unauthorized`, `TokenExpired`, `InvalidToken` | 401 |
//! | `Forbidden` | 403 |
//! | `InvalidOrder`, `InvalidStatus` | 400 |
//! | `NotFound` | 404 |
//! | `Database`, `Internal` | 500 |
//!
//! Storage failures are infrastructure errors: they are logged and returned
//! as an opaque 500, never retried here.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authentication (401) ==========
    #[error("Authentication required")]
    Unauthorized,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    // ========== Authorization (403) ==========
    #[error("Access denied: {0}")]
    Forbidden(String),

    // ========== Request validation (400) ==========
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    // ========== Missing resources (404) ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    // ========== Infrastructure (500) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
///
/// ```json
/// { "error": "invalid_status", "message": "Invalid status value: bogus" }
/// ```
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", self.to_string()),
            AppError::TokenExpired => (StatusCode::UNAUTHORIZED, "token_expired", self.to_string()),
            AppError::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, "invalid_token", self.to_string())
            }
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden", self.to_string()),
            AppError::InvalidOrder(_) => {
                (StatusCode::BAD_REQUEST, "invalid_order", self.to_string())
            }
            AppError::InvalidStatus(_) => {
                (StatusCode::BAD_REQUEST, "invalid_status", self.to_string())
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: kind,
            message,
        });

        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn token_expired() -> Self {
        Self::TokenExpired
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::InvalidToken(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn invalid_order(msg: impl Into<String>) -> Self {
        Self::InvalidOrder(msg.into())
    }

    pub fn invalid_status(value: impl Into<String>) -> Self {
        Self::InvalidStatus(value.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::TokenExpired | AppError::InvalidToken(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::InvalidOrder(_) | AppError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
