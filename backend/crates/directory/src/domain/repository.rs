//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{PostId, UserId};
use kernel::pagination::PageRequest;

use crate::domain::entity::post::{
    NewPost, Post, PostChanges, PostListItem, PostWithAuthor, PostWithAuthorContact, RecentPost,
};
use crate::domain::entity::user::{
    NewUser, User, UserCard, UserChanges, UserWithPostCount, UserWithPosts,
};
use crate::domain::value_object::user_role::UserRole;
use crate::error::DirectoryResult;

/// Saved user repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> DirectoryResult<Option<User>>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &str) -> DirectoryResult<Option<User>>;

    /// Insert an imported user
    async fn create(&self, user: &NewUser) -> DirectoryResult<User>;

    /// Page of users, newest first, with their post counts
    async fn list(&self, page: PageRequest) -> DirectoryResult<Vec<UserWithPostCount>>;

    /// Total number of saved users
    async fn count(&self) -> DirectoryResult<i64>;

    /// User with all of their posts
    async fn find_with_posts(&self, id: UserId) -> DirectoryResult<Option<UserWithPosts>>;

    /// Apply a partial update and return the stored row
    async fn update(&self, id: UserId, changes: &UserChanges) -> DirectoryResult<User>;

    async fn update_role(&self, id: UserId, role: UserRole) -> DirectoryResult<User>;

    /// Delete the user row and return it
    async fn delete(&self, id: UserId) -> DirectoryResult<User>;

    /// Most recently created users
    async fn latest(&self, take: i64) -> DirectoryResult<Vec<UserCard>>;
}

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert a post and return it with the author's contact details
    async fn create(&self, post: &NewPost) -> DirectoryResult<PostWithAuthorContact>;

    /// Find post with its full author
    async fn find_by_id(&self, id: PostId) -> DirectoryResult<Option<PostWithAuthor>>;

    /// Page of posts, newest first, optionally filtered by author
    async fn list(
        &self,
        page: PageRequest,
        author: Option<UserId>,
    ) -> DirectoryResult<Vec<PostListItem>>;

    /// Number of posts, optionally filtered by author
    async fn count(&self, author: Option<UserId>) -> DirectoryResult<i64>;

    async fn update(&self, id: PostId, changes: &PostChanges) -> DirectoryResult<Post>;

    async fn delete(&self, id: PostId) -> DirectoryResult<Post>;

    /// Delete every post of an author, returning the number removed
    async fn delete_by_author(&self, author: UserId) -> DirectoryResult<u64>;

    /// Most recently created posts
    async fn recent(&self, take: i64) -> DirectoryResult<Vec<RecentPost>>;
}
