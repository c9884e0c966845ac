//! Get Saved User Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::UserWithPosts;
use crate::domain::repository::UserRepository;
use crate::error::{DirectoryError, DirectoryResult};

/// Get saved user (with posts) use case
pub struct GetUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> GetUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, id: UserId) -> DirectoryResult<UserWithPosts> {
        self.user_repo
            .find_with_posts(id)
            .await?
            .ok_or(DirectoryError::UserNotFound(id))
    }
}
