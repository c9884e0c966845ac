//! Domain Layer

pub mod identity;

// Re-exports
pub use identity::{FALLBACK_AVATAR, LoginUser, MatchSource, ReconciledIdentity};
