//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::reqres::GatewayError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// ReqRes rejected the credentials (or could not be reached in time)
    #[error("Invalid credentials provided by ReqRes")]
    InvalidCredentials,

    /// Any other gateway failure while authenticating
    #[error(transparent)]
    Gateway(GatewayError),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::Gateway(GatewayError::Misconfigured(_)) => ErrorKind::Misconfigured,
            AuthError::Gateway(GatewayError::MalformedPayload(_)) => ErrorKind::BadUpstreamPayload,
            AuthError::Gateway(_) => ErrorKind::UpstreamUnavailable,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Gateway(e) => {
                tracing::error!(error = %e, "ReqRes login failed");
            }
        }
    }
}

impl From<GatewayError> for AuthError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::AuthRejected => AuthError::InvalidCredentials,
            other => AuthError::Gateway(other),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.log();
        AppError::new(err.kind(), err.to_string()).with_source(err)
    }
}
