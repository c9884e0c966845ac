//! Get Post Use Case

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entity::post::PostWithAuthor;
use crate::domain::repository::PostRepository;
use crate::error::{DirectoryError, DirectoryResult};

/// Get post (with full author) use case
pub struct GetPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> GetPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, id: PostId) -> DirectoryResult<PostWithAuthor> {
        self.post_repo
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::PostNotFound(id))
    }
}
