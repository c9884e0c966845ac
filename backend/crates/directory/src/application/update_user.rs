//! Update Saved User Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::{User, UserChanges};
use crate::domain::repository::UserRepository;
use crate::error::{DirectoryError, DirectoryResult};

/// Partial profile update use case
pub struct UpdateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, id: UserId, changes: UserChanges) -> DirectoryResult<User> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::UserNotFound(id))?;

        if let Some(email) = changes.email.as_deref() {
            if email != user.email && self.user_repo.find_by_email(email).await?.is_some() {
                return Err(DirectoryError::EmailTaken(email.to_string()));
            }
        }

        if changes.is_empty() {
            return Ok(user);
        }

        self.user_repo.update(id, &changes).await
    }
}
