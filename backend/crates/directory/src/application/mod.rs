//! Application Layer
//!
//! Use cases and application services.

pub mod create_post;
pub mod delete_post;
pub mod delete_user;
pub mod get_post;
pub mod get_user;
pub mod import_user;
pub mod list_posts;
pub mod list_users;
pub mod stats;
pub mod update_post;
pub mod update_role;
pub mod update_user;

// Re-exports
pub use create_post::CreatePostUseCase;
pub use delete_post::DeletePostUseCase;
pub use delete_user::DeleteUserUseCase;
pub use get_post::GetPostUseCase;
pub use get_user::GetUserUseCase;
pub use import_user::ImportUserUseCase;
pub use list_posts::ListPostsUseCase;
pub use list_users::ListUsersUseCase;
pub use stats::{DashboardStats, StatsUseCase};
pub use update_post::UpdatePostUseCase;
pub use update_role::UpdateRoleUseCase;
pub use update_user::UpdateUserUseCase;
