//! Gateway Error Types

use thiserror::Error;

/// Gateway result type alias
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failures of outbound ReqRes calls
///
/// Transport details are logged where they happen and never carried
/// in `AuthRejected`.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Required configuration is missing; no request was sent
    #[error("{0} is not configured")]
    Misconfigured(&'static str),

    /// Login failed (transport error, timeout or non-2xx)
    #[error("ReqRes rejected the credentials")]
    AuthRejected,

    /// The remote reported the user as not found
    #[error("ReqRes user {0} not found")]
    NotFound(i32),

    /// Transport failure or unexpected status on a lookup call
    #[error("ReqRes request failed: {0}")]
    Upstream(String),

    /// 2xx response whose body does not have the expected shape
    #[error("ReqRes returned an unexpected payload: {0}")]
    MalformedPayload(String),
}
