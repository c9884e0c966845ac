//! Update Post Use Case

use std::sync::Arc;

use kernel::id::PostId;

use crate::application::get_post::GetPostUseCase;
use crate::domain::entity::post::{Post, PostChanges};
use crate::domain::repository::PostRepository;
use crate::error::DirectoryResult;

/// Update post use case
pub struct UpdatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> UpdatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, id: PostId, changes: PostChanges) -> DirectoryResult<Post> {
        let existing = GetPostUseCase::new(self.post_repo.clone())
            .execute(id)
            .await?;

        if changes == PostChanges::default() {
            return Ok(existing.post);
        }

        self.post_repo.update(id, &changes).await
    }
}
