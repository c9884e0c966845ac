//! Auth (Authentication) Backend Module
//!
//! Login proxied to ReqRes, with the returned identity reconciled against
//! the locally saved users.
//!
//! Clean Architecture structure:
//! - `domain/` - Reconciled identity and its display shape
//! - `application/` - Login use case
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Login flow
//! 1. Fail fast when the ReqRes base URL is not configured
//! 2. Authenticate against ReqRes; a rejection is a 401 with a fixed message
//! 3. Resolve the identity: local store by email, then ReqRes user pages 1 and 2
//! 4. Fall back to an identity synthesized from the email
//!
//! Lookup failures in step 3 are logged and skipped, never surfaced.

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;


// Re-exports for convenience
pub use error::{AuthError, AuthResult};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::identity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
