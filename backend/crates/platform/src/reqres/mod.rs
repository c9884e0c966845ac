//! ReqRes Identity Gateway
//!
//! Outbound calls to the ReqRes mock identity provider:
//! - `POST {base}/login` exchanges credentials for an opaque token
//! - `GET {base}/users?page={n}` lists one page of users
//! - `GET {base}/users/{id}` fetches a single user
//!
//! Every call carries the `x-api-key` header. Retries are never performed.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod model;

pub use client::ReqResClient;
pub use config::ReqResConfig;
pub use error::{GatewayError, GatewayResult};
pub use gateway::{IdentityGateway, LocalIdentityGateway};
pub use model::{AuthToken, ExternalIdentity};
