//! Directory Router

use axum::{
    Router,
    routing::{get, patch, post},
};
use platform::reqres::{IdentityGateway, ReqResClient};
use std::sync::Arc;

use crate::domain::repository::{PostRepository, UserRepository};
use crate::infra::postgres::PgDirectoryRepository;
use crate::presentation::handlers::{self, DirectoryAppState};

/// Create the directory router with PostgreSQL repository and ReqRes client
pub fn directory_router(repo: PgDirectoryRepository, gateway: ReqResClient) -> Router {
    directory_router_generic(repo, gateway)
}

/// Create a generic directory router for any repository / gateway implementation
pub fn directory_router_generic<R, G>(repo: R, gateway: G) -> Router
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let state = DirectoryAppState {
        repo: Arc::new(repo),
        gateway: Arc::new(gateway),
    };

    Router::new()
        .route("/users/import/{id}", post(handlers::import_user::<R, G>))
        .route("/users/saved", get(handlers::list_users::<R, G>))
        .route(
            "/users/saved/{id}",
            get(handlers::get_user::<R, G>)
                .patch(handlers::update_user::<R, G>)
                .delete(handlers::delete_user::<R, G>),
        )
        .route("/users/saved/{id}/role", patch(handlers::update_role::<R, G>))
        .route(
            "/posts",
            post(handlers::create_post::<R, G>).get(handlers::list_posts::<R, G>),
        )
        .route(
            "/posts/{id}",
            get(handlers::get_post::<R, G>)
                .put(handlers::update_post::<R, G>)
                .delete(handlers::delete_post::<R, G>),
        )
        .route("/stats", get(handlers::stats::<R, G>))
        .with_state(state)
}
