//! Directory Error Types
//!
//! This module provides directory-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::{PostId, UserId};
use platform::reqres::GatewayError;
use thiserror::Error;

/// Directory-specific result type alias
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory-specific error variants
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Saved user not found
    #[error("Saved user with id {0} not found")]
    UserNotFound(UserId),

    /// Post author is not a saved user
    #[error("User with id {0} is not saved locally")]
    AuthorNotFound(UserId),

    /// Post not found
    #[error("Post with id {0} not found")]
    PostNotFound(PostId),

    /// ReqRes has no user with this id
    #[error("User with id {0} not found in ReqRes")]
    RemoteUserNotFound(i32),

    /// Import of an id that is already saved
    #[error("User with id {0} is already saved locally")]
    AlreadyImported(UserId),

    /// Email held by another saved user
    #[error("Email {0} is already in use by another user")]
    EmailTaken(String),

    /// Acting user is unknown or not an admin
    #[error("Only admins can delete users")]
    NotAdmin,

    /// Admin attempting to drop their own admin role
    #[error("You cannot remove your own admin role; ask another admin")]
    SelfDemotion,

    /// ReqRes call failed
    #[error("Failed to communicate with ReqRes")]
    UpstreamUnavailable(#[source] GatewayError),

    /// ReqRes answered without the expected user data
    #[error("ReqRes response does not contain the expected user data")]
    BadUpstreamPayload(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DirectoryError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::UserNotFound(_)
            | DirectoryError::AuthorNotFound(_)
            | DirectoryError::PostNotFound(_)
            | DirectoryError::RemoteUserNotFound(_) => ErrorKind::NotFound,
            DirectoryError::AlreadyImported(_) | DirectoryError::EmailTaken(_) => {
                ErrorKind::Conflict
            }
            DirectoryError::NotAdmin | DirectoryError::SelfDemotion => ErrorKind::Forbidden,
            DirectoryError::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            DirectoryError::BadUpstreamPayload(_) => ErrorKind::BadUpstreamPayload,
            DirectoryError::Database(_) => ErrorKind::Unclassified,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DirectoryError::Database(e) => {
                tracing::error!(error = %e, "Directory database error");
            }
            DirectoryError::UpstreamUnavailable(e) => {
                tracing::error!(error = %e, "ReqRes lookup failed");
            }
            DirectoryError::BadUpstreamPayload(detail) => {
                tracing::error!(detail = %detail, "ReqRes returned an unusable user payload");
            }
            DirectoryError::NotAdmin | DirectoryError::SelfDemotion => {
                tracing::warn!(error = %self, "Directory permission denied");
            }
            _ => {
                tracing::debug!(error = %self, "Directory error");
            }
        }
    }
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        err.log();
        match err {
            DirectoryError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()).with_source(other),
        }
    }
}

impl From<GatewayError> for DirectoryError {
    /// Classification used by the import flow
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound(id) => DirectoryError::RemoteUserNotFound(id),
            GatewayError::MalformedPayload(detail) => DirectoryError::BadUpstreamPayload(detail),
            other => DirectoryError::UpstreamUnavailable(other),
        }
    }
}
