//! List Posts Use Case

use std::sync::Arc;

use kernel::id::UserId;
use kernel::pagination::{PageRequest, Paginated};

use crate::domain::entity::post::PostListItem;
use crate::domain::repository::PostRepository;
use crate::error::DirectoryResult;

/// List posts use case
pub struct ListPostsUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ListPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// `author` restricts both the page and the total
    pub async fn execute(
        &self,
        page: PageRequest,
        author: Option<UserId>,
    ) -> DirectoryResult<Paginated<PostListItem>> {
        let (data, total) = tokio::try_join!(
            self.post_repo.list(page, author),
            self.post_repo.count(author)
        )?;

        Ok(Paginated {
            data,
            meta: page.meta(total),
        })
    }
}
