//! Import User Use Case
//!
//! Copies a ReqRes user into the local store.

use std::sync::Arc;

use kernel::id::UserId;
use platform::reqres::IdentityGateway;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::error::{DirectoryError, DirectoryResult};

/// Import user use case
pub struct ImportUserUseCase<U, G>
where
    U: UserRepository,
    G: IdentityGateway,
{
    user_repo: Arc<U>,
    gateway: Arc<G>,
}

impl<U, G> ImportUserUseCase<U, G>
where
    U: UserRepository,
    G: IdentityGateway,
{
    pub fn new(user_repo: Arc<U>, gateway: Arc<G>) -> Self {
        Self { user_repo, gateway }
    }

    pub async fn execute(&self, id: i32) -> DirectoryResult<User> {
        let user_id = UserId::new(id);

        // Already saved: no ReqRes call
        if self.user_repo.find_by_id(user_id).await?.is_some() {
            return Err(DirectoryError::AlreadyImported(user_id));
        }

        let remote = self.gateway.get_user_by_id(id).await?;

        if remote.email.trim().is_empty() {
            return Err(DirectoryError::BadUpstreamPayload(format!(
                "user {} has no email",
                id
            )));
        }

        let user = self
            .user_repo
            .create(&NewUser::from_external(remote, id))
            .await?;

        tracing::info!(
            user_id = %user.id,
            role = %user.role,
            "User imported from ReqRes"
        );

        Ok(user)
    }
}
