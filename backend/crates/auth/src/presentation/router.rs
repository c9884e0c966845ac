//! Auth Router

use axum::{Router, routing::post};
use directory::PgDirectoryRepository;
use directory::store::UserRepository;
use platform::reqres::{IdentityGateway, ReqResClient};
use std::sync::Arc;

use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository and ReqRes client
pub fn auth_router(repo: PgDirectoryRepository, gateway: ReqResClient) -> Router {
    auth_router_generic(repo, gateway)
}

/// Create a generic Auth router for any repository / gateway implementation
pub fn auth_router_generic<R, G>(repo: R, gateway: G) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        gateway: Arc::new(gateway),
    };

    Router::new()
        .route("/auth/login", post(handlers::login::<R, G>))
        .with_state(state)
}
