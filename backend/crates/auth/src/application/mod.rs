//! Application Layer

pub mod login;

// Re-exports
pub use login::{LoginInput, LoginOutput, LoginUseCase};
