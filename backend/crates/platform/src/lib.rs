//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Client identification from request headers
//! - Request-id assignment and request logging middleware
//! - The ReqRes identity gateway client (login, user listing, user lookup)

pub mod client;
pub mod request_log;
pub mod reqres;
