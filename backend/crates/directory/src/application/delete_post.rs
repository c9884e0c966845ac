//! Delete Post Use Case

use std::sync::Arc;

use kernel::id::PostId;

use crate::application::get_post::GetPostUseCase;
use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::DirectoryResult;

/// Delete post use case
pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, id: PostId) -> DirectoryResult<Post> {
        GetPostUseCase::new(self.post_repo.clone())
            .execute(id)
            .await?;

        let post = self.post_repo.delete(id).await?;

        tracing::info!(post_id = %id, "Post deleted");

        Ok(post)
    }
}
