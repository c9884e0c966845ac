//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{post::Post, user::User};
pub use repository::{PostRepository, UserRepository};
pub use value_object::user_role::UserRole;
