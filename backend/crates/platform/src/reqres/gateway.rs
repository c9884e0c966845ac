//! Gateway Trait
//!
//! Seam between the use cases and the ReqRes HTTP client.

use super::error::GatewayResult;
use super::model::{AuthToken, ExternalIdentity};

/// External identity provider
#[trait_variant::make(IdentityGateway: Send)]
pub trait LocalIdentityGateway {
    /// Fails with `Misconfigured` when the base URL is absent; performs no I/O
    fn ensure_configured(&self) -> GatewayResult<()>;

    /// Exchange credentials for a token
    async fn authenticate(&self, email: &str, password: &str) -> GatewayResult<AuthToken>;

    /// Fetch one 1-based page of users
    async fn list_users(&self, page: u32) -> GatewayResult<Vec<ExternalIdentity>>;

    /// Fetch a single user
    async fn get_user_by_id(&self, id: i32) -> GatewayResult<ExternalIdentity>;
}
