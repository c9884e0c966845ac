//! List Saved Users Use Case

use std::sync::Arc;

use kernel::pagination::{PageRequest, Paginated};

use crate::domain::entity::user::UserWithPostCount;
use crate::domain::repository::UserRepository;
use crate::error::DirectoryResult;

/// List saved users use case
pub struct ListUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ListUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, page: PageRequest) -> DirectoryResult<Paginated<UserWithPostCount>> {
        let (data, total) =
            tokio::try_join!(self.user_repo.list(page), self.user_repo.count())?;

        Ok(Paginated {
            data,
            meta: page.meta(total),
        })
    }
}
