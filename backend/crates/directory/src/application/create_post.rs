//! Create Post Use Case

use std::sync::Arc;

use crate::domain::entity::post::{NewPost, PostWithAuthorContact};
use crate::domain::repository::{PostRepository, UserRepository};
use crate::error::{DirectoryError, DirectoryResult};

/// Create post use case
pub struct CreatePostUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    user_repo: Arc<U>,
    post_repo: Arc<P>,
}

impl<U, P> CreatePostUseCase<U, P>
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

    pub async fn execute(&self, input: NewPost) -> DirectoryResult<PostWithAuthorContact> {
        let author = input.author_user_id;
        if self.user_repo.find_by_id(author).await?.is_none() {
            return Err(DirectoryError::AuthorNotFound(author));
        }

        let created = self.post_repo.create(&input).await?;

        tracing::info!(post_id = %created.post.id, author_user_id = %author, "Post created");

        Ok(created)
    }
}
