/// Error types for Comment Service
///
/// This module defines all error types that can occur in the comment-service.
/// Errors are converted to appropriate HTTP responses: unauthenticated
/// callers are redirected to the sign-in page, a missing parent item is a
/// 404, and a rejected comment body is a 422.
use actix_web::{error::ResponseError, http::header, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for comment-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Comment payload rejected by validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// No authenticated caller; redirect to the sign-in page
    #[error("Unauthorized")]
    Unauthorized { redirect_to: String },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized { .. } => StatusCode::SEE_OTHER,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Both response formats are page-oriented, so an unauthenticated
            // caller gets sent to the sign-in page rather than a bare 401.
            AppError::Unauthorized { redirect_to } => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, redirect_to.as_str()))
                .finish(),
            _ => {
                let status = self.status_code();
                HttpResponse::build(status).json(serde_json::json!({
                    "error": self.to_string(),
                    "status": status.as_u16(),
                }))
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_signin_redirect() {
        let err = AppError::Unauthorized {
            redirect_to: "/signin".to_string(),
        };
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/signin"
        );
    }

    #[test]
    fn validation_maps_to_422() {
        let err = AppError::Validation("body must not be empty".into());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("item".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
