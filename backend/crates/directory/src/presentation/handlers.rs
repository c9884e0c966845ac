//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::{PostId, UserId};
use kernel::pagination::Paginated;
use kernel::response::ApiResponse;
use platform::reqres::IdentityGateway;

use crate::application::{
    CreatePostUseCase, DashboardStats, DeletePostUseCase, DeleteUserUseCase, GetPostUseCase,
    GetUserUseCase, ImportUserUseCase, ListPostsUseCase, ListUsersUseCase, StatsUseCase,
    UpdatePostUseCase, UpdateRoleUseCase, UpdateUserUseCase,
};
use crate::domain::entity::post::{Post, PostListItem, PostWithAuthor, PostWithAuthorContact};
use crate::domain::entity::user::{User, UserWithPostCount, UserWithPosts};
use crate::domain::repository::{PostRepository, UserRepository};
use crate::presentation::dto::{
    AdminQuery, CreatePostRequest, PageQuery, PostListQuery, UpdatePostRequest,
    UpdateRoleRequest, UpdateUserRequest,
};

/// Shared state for directory handlers
#[derive(Clone)]
pub struct DirectoryAppState<R, G>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub gateway: Arc<G>,
}

// ============================================================================
// Users
// ============================================================================

/// POST /users/import/{id}
pub async fn import_user<R, G>(
    State(state): State<DirectoryAppState<R, G>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<ApiResponse<User>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let use_case = ImportUserUseCase::new(state.repo.clone(), state.gateway.clone());
    let user = use_case.execute(id).await?;

    Ok(ApiResponse::created(user))
}

/// GET /users/saved
pub async fn list_users<R, G>(
    State(state): State<DirectoryAppState<R, G>>,
    WithRejection(Query(query), _): WithRejection<Query<PageQuery>, AppError>,
) -> AppResult<ApiResponse<Paginated<UserWithPostCount>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let page = query.to_page_request()?;
    let users = ListUsersUseCase::new(state.repo.clone())
        .execute(page)
        .await?;

    Ok(ApiResponse::success(users))
}

/// GET /users/saved/{id}
pub async fn get_user<R, G>(
    State(state): State<DirectoryAppState<R, G>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<ApiResponse<UserWithPosts>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let user = GetUserUseCase::new(state.repo.clone())
        .execute(UserId::new(id))
        .await?;

    Ok(ApiResponse::success(user))
}

/// DELETE /users/saved/{id}?adminId=
pub async fn delete_user<R, G>(
    State(state): State<DirectoryAppState<R, G>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<AdminQuery>, AppError>,
) -> AppResult<ApiResponse<User>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let use_case = DeleteUserUseCase::new(state.repo.clone(), state.repo.clone());
    let user = use_case
        .execute(UserId::new(id), UserId::new(query.admin_id))
        .await?;

    Ok(ApiResponse::success(user))
}

/// PATCH /users/saved/{id}
pub async fn update_user<R, G>(
    State(state): State<DirectoryAppState<R, G>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateUserRequest>, AppError>,
) -> AppResult<ApiResponse<User>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let changes = req.validate()?;
    let user = UpdateUserUseCase::new(state.repo.clone())
        .execute(UserId::new(id), changes)
        .await?;

    Ok(ApiResponse::success(user))
}

/// PATCH /users/saved/{id}/role
pub async fn update_role<R, G>(
    State(state): State<DirectoryAppState<R, G>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateRoleRequest>, AppError>,
) -> AppResult<ApiResponse<User>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let user = UpdateRoleUseCase::new(state.repo.clone())
        .execute(UserId::new(id), req.role, UserId::new(req.admin_id))
        .await?;

    Ok(ApiResponse::success(user))
}

// ============================================================================
// Posts
// ============================================================================

/// POST /posts
pub async fn create_post<R, G>(
    State(state): State<DirectoryAppState<R, G>>,
    WithRejection(Json(req), _): WithRejection<Json<CreatePostRequest>, AppError>,
) -> AppResult<ApiResponse<PostWithAuthorContact>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let input = req.validate()?;
    let post = CreatePostUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(input)
        .await?;

    Ok(ApiResponse::created(post))
}

/// GET /posts
pub async fn list_posts<R, G>(
    State(state): State<DirectoryAppState<R, G>>,
    WithRejection(Query(query), _): WithRejection<Query<PostListQuery>, AppError>,
) -> AppResult<ApiResponse<Paginated<PostListItem>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let page = query.to_page_request()?;
    let posts = ListPostsUseCase::new(state.repo.clone())
        .execute(page, query.author())
        .await?;

    Ok(ApiResponse::success(posts))
}

/// GET /posts/{id}
pub async fn get_post<R, G>(
    State(state): State<DirectoryAppState<R, G>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<ApiResponse<PostWithAuthor>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let post = GetPostUseCase::new(state.repo.clone())
        .execute(PostId::new(id))
        .await?;

    Ok(ApiResponse::success(post))
}

/// PUT /posts/{id}
pub async fn update_post<R, G>(
    State(state): State<DirectoryAppState<R, G>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<UpdatePostRequest>, AppError>,
) -> AppResult<ApiResponse<Post>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let changes = req.validate()?;
    let post = UpdatePostUseCase::new(state.repo.clone())
        .execute(PostId::new(id), changes)
        .await?;

    Ok(ApiResponse::success(post))
}

/// DELETE /posts/{id}
pub async fn delete_post<R, G>(
    State(state): State<DirectoryAppState<R, G>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<ApiResponse<Post>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let post = DeletePostUseCase::new(state.repo.clone())
        .execute(PostId::new(id))
        .await?;

    Ok(ApiResponse::success(post))
}

// ============================================================================
// Stats
// ============================================================================

/// GET /stats
pub async fn stats<R, G>(
    State(state): State<DirectoryAppState<R, G>>,
) -> AppResult<ApiResponse<DashboardStats>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    let stats = StatsUseCase::new(state.repo.clone(), state.repo.clone())
        .execute()
        .await?;

    Ok(ApiResponse::success(stats))
}
