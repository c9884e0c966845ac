//! Directory Backend Module
//!
//! Locally saved ReqRes users and the posts they author.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Import a ReqRes user by id (id 1 is imported as ADMIN)
//! - Paginated listing, detail, partial update and role change of saved users
//! - Admin-only deletion of a user together with their posts
//! - Post CRUD with author summaries
//! - Dashboard stats

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{DirectoryError, DirectoryResult};
pub use infra::postgres::PgDirectoryRepository;
pub use presentation::router::{directory_router, directory_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::post::*;
    pub use crate::domain::entity::user::*;
    pub use crate::domain::value_object::email::Email;
    pub use crate::domain::value_object::user_role::UserRole;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgDirectoryRepository as DirectoryStore;
    pub use crate::domain::repository::{PostRepository, UserRepository};

    #[cfg(any(test, feature = "memory"))]
    pub use crate::infra::memory::InMemoryDirectory;
}
