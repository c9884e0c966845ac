//! In-memory Repository
//!
//! Test double for both repository traits. Every call is appended to an
//! operation log so tests can assert call order and absence of calls.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, TimeZone, Utc};
use kernel::id::{PostId, UserId};
use kernel::pagination::PageRequest;

use crate::domain::entity::post::{
    AuthorCard, AuthorContact, AuthorName, NewPost, Post, PostChanges, PostListItem, PostWith,
    PostWithAuthor, PostWithAuthorContact, RecentPost,
};
use crate::domain::entity::user::{
    NewUser, PostCount, User, UserCard, UserChanges, UserWithPostCount, UserWithPosts,
};
use crate::domain::repository::{PostRepository, UserRepository};
use crate::domain::value_object::user_role::UserRole;
use crate::error::{DirectoryError, DirectoryResult};

#[derive(Default)]
struct State {
    users: BTreeMap<i32, User>,
    posts: BTreeMap<i32, Post>,
    next_post_id: i32,
    clock: i64,
    operations: Vec<String>,
    failing: bool,
}

impl State {
    /// Strictly increasing timestamps keep "newest first" deterministic
    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += 1;
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_else(Utc::now)
            + Duration::seconds(self.clock)
    }

    fn record(&mut self, op: String) -> DirectoryResult<()> {
        self.operations.push(op);
        if self.failing {
            return Err(DirectoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn author_of(&self, post: &Post) -> DirectoryResult<User> {
        self.users
            .get(&post.author_user_id.get())
            .cloned()
            .ok_or(DirectoryError::AuthorNotFound(post.author_user_id))
    }
}

/// Shared in-memory store
#[derive(Clone, Default)]
pub struct InMemoryDirectory {
    state: Arc<Mutex<State>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Insert a user directly, bypassing the operation log
    pub fn seed_user(
        &self,
        id: i32,
        email: &str,
        first_name: &str,
        last_name: &str,
        role: UserRole,
    ) -> User {
        let mut state = self.lock();
        let now = state.tick();
        let user = User {
            id: UserId::new(id),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            avatar: None,
            role,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(id, user.clone());
        user
    }

    /// Insert a post directly, bypassing the operation log
    pub fn seed_post(&self, author: i32, title: &str) -> Post {
        let mut state = self.lock();
        let now = state.tick();
        state.next_post_id += 1;
        let post = Post {
            id: PostId::new(state.next_post_id),
            title: title.to_string(),
            content: format!("{} content", title),
            author_user_id: UserId::new(author),
            created_at: now,
            updated_at: now,
        };
        state.posts.insert(post.id.get(), post.clone());
        post
    }

    /// Make every subsequent repository call fail with a database error
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    /// Calls made so far, e.g. `users.find_by_id(2)`
    pub fn operations(&self) -> Vec<String> {
        self.lock().operations.clone()
    }

    pub fn clear_operations(&self) {
        self.lock().operations.clear();
    }

    pub fn user(&self, id: i32) -> Option<User> {
        self.lock().users.get(&id).cloned()
    }

    pub fn post(&self, id: i32) -> Option<Post> {
        self.lock().posts.get(&id).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    pub fn post_count(&self) -> usize {
        self.lock().posts.len()
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for InMemoryDirectory {
    async fn find_by_id(&self, id: UserId) -> DirectoryResult<Option<User>> {
        let mut state = self.lock();
        state.record(format!("users.find_by_id({})", id))?;
        Ok(state.users.get(&id.get()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DirectoryResult<Option<User>> {
        let mut state = self.lock();
        state.record(format!("users.find_by_email({})", email))?;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: &NewUser) -> DirectoryResult<User> {
        let mut state = self.lock();
        state.record(format!("users.create({})", user.id))?;
        if state.users.contains_key(&user.id.get())
            || state.users.values().any(|u| u.email == user.email)
        {
            return Err(DirectoryError::AlreadyImported(user.id));
        }
        let now = state.tick();
        let created = User {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            avatar: user.avatar.clone(),
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(user.id.get(), created.clone());
        Ok(created)
    }

    async fn list(&self, page: PageRequest) -> DirectoryResult<Vec<UserWithPostCount>> {
        let mut state = self.lock();
        state.record(format!("users.list({}, {})", page.page(), page.limit()))?;

        let mut users: Vec<&User> = state.users.values().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.get().cmp(&a.id.get())));

        Ok(users
            .into_iter()
            .skip(page.skip() as usize)
            .take(page.limit() as usize)
            .map(|u| UserWithPostCount {
                user: u.clone(),
                count: PostCount {
                    posts: state
                        .posts
                        .values()
                        .filter(|p| p.author_user_id == u.id)
                        .count() as i64,
                },
            })
            .collect())
    }

    async fn count(&self) -> DirectoryResult<i64> {
        let mut state = self.lock();
        state.record("users.count".to_string())?;
        Ok(state.users.len() as i64)
    }

    async fn find_with_posts(&self, id: UserId) -> DirectoryResult<Option<UserWithPosts>> {
        let mut state = self.lock();
        state.record(format!("users.find_with_posts({})", id))?;
        Ok(state.users.get(&id.get()).map(|user| UserWithPosts {
            user: user.clone(),
            posts: state
                .posts
                .values()
                .filter(|p| p.author_user_id == id)
                .cloned()
                .collect(),
        }))
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> DirectoryResult<User> {
        let mut state = self.lock();
        state.record(format!("users.update({})", id))?;
        let user = state
            .users
            .get_mut(&id.get())
            .ok_or(DirectoryError::UserNotFound(id))?;
        user.apply(changes.clone());
        Ok(user.clone())
    }

    async fn update_role(&self, id: UserId, role: UserRole) -> DirectoryResult<User> {
        let mut state = self.lock();
        state.record(format!("users.update_role({}, {})", id, role))?;
        let user = state
            .users
            .get_mut(&id.get())
            .ok_or(DirectoryError::UserNotFound(id))?;
        user.role = role;
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DirectoryResult<User> {
        let mut state = self.lock();
        state.record(format!("users.delete({})", id))?;
        state
            .users
            .remove(&id.get())
            .ok_or(DirectoryError::UserNotFound(id))
    }

    async fn latest(&self, take: i64) -> DirectoryResult<Vec<UserCard>> {
        let mut state = self.lock();
        state.record(format!("users.latest({})", take))?;
        let mut users: Vec<&User> = state.users.values().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users.into_iter().take(take as usize).map(User::card).collect())
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for InMemoryDirectory {
    async fn create(&self, post: &NewPost) -> DirectoryResult<PostWithAuthorContact> {
        let mut state = self.lock();
        state.record(format!("posts.create({})", post.author_user_id))?;
        let now = state.tick();
        state.next_post_id += 1;
        let created = Post {
            id: PostId::new(state.next_post_id),
            title: post.title.clone(),
            content: post.content.clone(),
            author_user_id: post.author_user_id,
            created_at: now,
            updated_at: now,
        };
        let author = state.author_of(&created)?;
        state.posts.insert(created.id.get(), created.clone());
        Ok(PostWith {
            post: created,
            author: AuthorContact::from(&author),
        })
    }

    async fn find_by_id(&self, id: PostId) -> DirectoryResult<Option<PostWithAuthor>> {
        let mut state = self.lock();
        state.record(format!("posts.find_by_id({})", id))?;
        let Some(post) = state.posts.get(&id.get()).cloned() else {
            return Ok(None);
        };
        let author = state.author_of(&post)?;
        Ok(Some(PostWith { post, author }))
    }

    async fn list(
        &self,
        page: PageRequest,
        author: Option<UserId>,
    ) -> DirectoryResult<Vec<PostListItem>> {
        let mut state = self.lock();
        state.record(format!(
            "posts.list({}, {}, {:?})",
            page.page(),
            page.limit(),
            author.map(|a| a.get())
        ))?;

        let mut posts: Vec<&Post> = state
            .posts
            .values()
            .filter(|p| author.is_none_or(|a| p.author_user_id == a))
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.get().cmp(&a.id.get())));

        posts
            .into_iter()
            .skip(page.skip() as usize)
            .take(page.limit() as usize)
            .map(|p| {
                let author = state.author_of(p)?;
                Ok(PostWith {
                    post: p.clone(),
                    author: AuthorCard::from(&author),
                })
            })
            .collect()
    }

    async fn count(&self, author: Option<UserId>) -> DirectoryResult<i64> {
        let mut state = self.lock();
        state.record(format!("posts.count({:?})", author.map(|a| a.get())))?;
        Ok(state
            .posts
            .values()
            .filter(|p| author.is_none_or(|a| p.author_user_id == a))
            .count() as i64)
    }

    async fn update(&self, id: PostId, changes: &PostChanges) -> DirectoryResult<Post> {
        let mut state = self.lock();
        state.record(format!("posts.update({})", id))?;
        let post = state
            .posts
            .get_mut(&id.get())
            .ok_or(DirectoryError::PostNotFound(id))?;
        post.apply(changes.clone());
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DirectoryResult<Post> {
        let mut state = self.lock();
        state.record(format!("posts.delete({})", id))?;
        state
            .posts
            .remove(&id.get())
            .ok_or(DirectoryError::PostNotFound(id))
    }

    async fn delete_by_author(&self, author: UserId) -> DirectoryResult<u64> {
        let mut state = self.lock();
        state.record(format!("posts.delete_by_author({})", author))?;
        let before = state.posts.len();
        state.posts.retain(|_, p| p.author_user_id != author);
        Ok((before - state.posts.len()) as u64)
    }

    async fn recent(&self, take: i64) -> DirectoryResult<Vec<RecentPost>> {
        let mut state = self.lock();
        state.record(format!("posts.recent({})", take))?;
        let mut posts: Vec<Post> = state.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        posts
            .into_iter()
            .take(take as usize)
            .map(|p| {
                let author = state.author_of(&p)?;
                Ok(RecentPost {
                    id: p.id,
                    title: p.title,
                    created_at: p.created_at,
                    author: AuthorName {
                        first_name: author.first_name,
                        last_name: author.last_name,
                    },
                })
            })
            .collect()
    }
}
