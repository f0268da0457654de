//! Error handling for Pulseboard
//!
//! This module defines all error types used throughout the service.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Result type alias for Pulseboard
pub type Result<T> = std::result::Result<T, PulseboardError>;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum PulseboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (malformed request body or query)
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// The external usage API returned a non-success status or failed
    #[error("GitHub API error: {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for PulseboardError {
    fn status_code(&self) -> StatusCode {
        match self {
            PulseboardError::Validation { .. } => StatusCode::BAD_REQUEST,
            PulseboardError::NotFound(_) => StatusCode::NOT_FOUND,
            PulseboardError::Upstream { status, .. } => status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (code, message, details) = match self {
            PulseboardError::Config(_) => ("CONFIG_ERROR", self.to_string(), None),
            PulseboardError::Validation { message, details } => (
                "VALIDATION_ERROR",
                format!("Validation error: {}", message),
                details.clone(),
            ),
            PulseboardError::NotFound(msg) => ("NOT_FOUND", msg.clone(), None),
            PulseboardError::Upstream { .. } => ("UPSTREAM_ERROR", self.to_string(), None),
            PulseboardError::HttpClient(_) => ("UPSTREAM_ERROR", self.to_string(), None),
            _ => (
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
                None,
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub timestamp: i64,
}

/// Helper functions for creating specific errors
impl PulseboardError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            details: None,
        }
    }

    pub fn validation_with_details<S: Into<String>>(
        message: S,
        details: serde_json::Value,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn upstream<S: Into<String>>(status: Option<u16>, message: S) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = PulseboardError::not_found("Metric with ID m-1 not found");
        assert!(matches!(error, PulseboardError::NotFound(_)));

        let error = PulseboardError::validation("missing field `value`");
        assert!(matches!(error, PulseboardError::Validation { .. }));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PulseboardError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PulseboardError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            PulseboardError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_status_passthrough() {
        let error = PulseboardError::upstream(Some(403), "insufficient scopes");
        assert_eq!(error.status_code(), StatusCode::FORBIDDEN);

        // Unknown upstream status falls back to 500
        let error = PulseboardError::upstream(None, "connection reset");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
