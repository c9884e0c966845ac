//! Dashboard Stats Use Case
//!
//! Totals plus the newest users and posts, read concurrently.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entity::post::RecentPost;
use crate::domain::entity::user::UserCard;
use crate::domain::repository::{PostRepository, UserRepository};
use crate::error::DirectoryResult;

/// Number of latest users / recent posts on the dashboard
pub const DASHBOARD_TAKE: i64 = 3;

/// Dashboard stats output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_posts: i64,
    pub latest_users: Vec<UserCard>,
    pub recent_posts: Vec<RecentPost>,
}

/// Dashboard stats use case
pub struct StatsUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    user_repo: Arc<U>,
    post_repo: Arc<P>,
}

impl<U, P> StatsUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    pub fn new(user_repo: Arc<U>, post_repo: Arc<P>) -> Self {
        Self {
            user_repo,
            post_repo,
        }
    }

    pub async fn execute(&self) -> DirectoryResult<DashboardStats> {
        let (total_users, total_posts, latest_users, recent_posts) = tokio::try_join!(
            self.user_repo.count(),
            self.post_repo.count(None),
            self.user_repo.latest(DASHBOARD_TAKE),
            self.post_repo.recent(DASHBOARD_TAKE)
        )?;

        Ok(DashboardStats {
            total_users,
            total_posts,
            latest_users,
            recent_posts,
        })
    }
}
