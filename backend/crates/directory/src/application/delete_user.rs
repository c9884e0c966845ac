//! Delete Saved User Use Case
//!
//! Admin-only. Removes the user's posts, then the user.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::{PostRepository, UserRepository};
use crate::error::{DirectoryError, DirectoryResult};

/// Delete saved user use case
pub struct DeleteUserUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    user_repo: Arc<U>,
    post_repo: Arc<P>,
}

impl<U, P> DeleteUserUseCase<U, P>
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

    pub async fn execute(&self, id: UserId, admin_id: UserId) -> DirectoryResult<User> {
        // Unknown acting user is treated like a non-admin
        let is_admin = self
            .user_repo
            .find_by_id(admin_id)
            .await?
            .is_some_and(|admin| admin.role.is_admin());
        if !is_admin {
            return Err(DirectoryError::NotAdmin);
        }

        if self.user_repo.find_by_id(id).await?.is_none() {
            return Err(DirectoryError::UserNotFound(id));
        }

        let posts_deleted = self.post_repo.delete_by_author(id).await?;
        let user = self.user_repo.delete(id).await?;

        tracing::info!(
            user_id = %id,
            admin_id = %admin_id,
            posts_deleted,
            "Saved user deleted"
        );

        Ok(user)
    }
}
