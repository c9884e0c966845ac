//! Update User Role Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{DirectoryError, DirectoryResult};

/// Change a saved user's role
pub struct UpdateRoleUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateRoleUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(
        &self,
        id: UserId,
        role: UserRole,
        admin_id: UserId,
    ) -> DirectoryResult<User> {
        // Checked before any lookup
        if id == admin_id && role == UserRole::User {
            return Err(DirectoryError::SelfDemotion);
        }

        if self.user_repo.find_by_id(id).await?.is_none() {
            return Err(DirectoryError::UserNotFound(id));
        }

        let user = self.user_repo.update_role(id, role).await?;

        tracing::info!(user_id = %id, admin_id = %admin_id, role = %role, "User role updated");

        Ok(user)
    }
}
