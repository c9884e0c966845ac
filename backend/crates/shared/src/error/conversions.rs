//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`],
//! and renders [`AppError`] as the uniform response envelope.

use super::app_error::AppError;
use crate::pagination::PageError;

// ============================================================================
// Kernel conversions
// ============================================================================

impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        AppError::bad_request(err.to_string()).with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::unclassified("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::Database(db_err) => {
                // PostgreSQL specific error codes
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    // Class 23 — Integrity Constraint Violation
                    Some("23505") => AppError::conflict("Duplicate key value"),
                    Some("23503") => AppError::conflict("Foreign key violation"),
                    Some("23502") => AppError::bad_request("Required field is null"),
                    Some("23514") => AppError::bad_request("Check constraint violation"),
                    _ => AppError::unclassified("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                AppError::unclassified("Database connection error").with_source(err)
            }
            _ => AppError::unclassified("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
mod axum_impls {
    use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
    use axum::response::{IntoResponse, Response};

    use super::AppError;
    use crate::response::ApiResponse;

    impl From<JsonRejection> for AppError {
        fn from(rejection: JsonRejection) -> Self {
            AppError::bad_request(rejection.body_text())
        }
    }

    impl From<PathRejection> for AppError {
        fn from(rejection: PathRejection) -> Self {
            AppError::bad_request(rejection.body_text())
        }
    }

    impl From<QueryRejection> for AppError {
        fn from(rejection: QueryRejection) -> Self {
            AppError::bad_request(rejection.body_text())
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            if self.is_server_error() {
                tracing::error!(
                    kind = %self.kind(),
                    error = %self,
                    source = ?std::error::Error::source(&self),
                    "Request failed"
                );
            } else {
                tracing::debug!(kind = %self.kind(), error = %self, "Request rejected");
            }

            ApiResponse::error(self.client_message().to_owned(), self.status_code())
                .into_response()
        }
    }
}
