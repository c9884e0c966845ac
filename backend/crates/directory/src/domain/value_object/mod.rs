//! Value Objects

pub mod email;
pub mod user_role;
