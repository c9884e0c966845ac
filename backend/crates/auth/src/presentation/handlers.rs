//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;
use directory::store::UserRepository;
use kernel::error::app_error::{AppError, AppResult};
use kernel::response::ApiResponse;
use platform::reqres::IdentityGateway;

use crate::application::{LoginOutput, LoginUseCase};
use crate::presentation::dto::LoginRequest;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R, G>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub gateway: Arc<G>,
}

/// POST /auth/login
pub async fn login<R, G>(
    State(state): State<AuthAppState<R, G>>,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, AppError>,
) -> AppResult<ApiResponse<LoginOutput>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let input = req.validate()?;
    let output = LoginUseCase::new(state.repo.clone(), state.gateway.clone())
        .execute(input)
        .await?;

    Ok(ApiResponse::success(output))
}
