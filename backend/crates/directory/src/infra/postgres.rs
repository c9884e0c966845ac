//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use kernel::pagination::PageRequest;
use sqlx::PgPool;

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

/// PostgreSQL-backed directory repository
#[derive(Clone)]
pub struct PgDirectoryRepository {
    pool: PgPool,
}

impl PgDirectoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn posts_of(&self, author: UserId) -> DirectoryResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_user_id, created_at, updated_at
            FROM posts
            WHERE author_user_id = $1
            ORDER BY id
            "#,
        )
        .bind(author.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgDirectoryRepository {
    async fn find_by_id(&self, id: UserId) -> DirectoryResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, first_name, last_name, avatar, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> DirectoryResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, first_name, last_name, avatar, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn create(&self, user: &NewUser) -> DirectoryResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, first_name, last_name, avatar, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, first_name, last_name, avatar, role, created_at, updated_at
            "#,
        )
        .bind(user.id.get())
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.avatar.as_deref())
        .bind(user.role.code())
        .fetch_one(&self.pool)
        .await?;

        row.into_user()
    }

    async fn list(&self, page: PageRequest) -> DirectoryResult<Vec<UserWithPostCount>> {
        let rows = sqlx::query_as::<_, UserWithCountRow>(
            r#"
            SELECT
                u.id,
                u.email,
                u.first_name,
                u.last_name,
                u.avatar,
                u.role,
                u.created_at,
                u.updated_at,
                (SELECT COUNT(*) FROM posts p WHERE p.author_user_id = u.id) AS post_count
            FROM users u
            ORDER BY u.created_at DESC, u.id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(UserWithPostCount {
                    user: r.user.into_user()?,
                    count: PostCount {
                        posts: r.post_count,
                    },
                })
            })
            .collect()
    }

    async fn count(&self) -> DirectoryResult<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn find_with_posts(&self, id: UserId) -> DirectoryResult<Option<UserWithPosts>> {
        let Some(user) = UserRepository::find_by_id(self, id).await? else {
            return Ok(None);
        };
        let posts = self.posts_of(id).await?;

        Ok(Some(UserWithPosts { user, posts }))
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> DirectoryResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                email = COALESCE($2, email),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                avatar = COALESCE($5, avatar),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, first_name, last_name, avatar, role, created_at, updated_at
            "#,
        )
        .bind(id.get())
        .bind(changes.email.as_deref())
        .bind(changes.first_name.as_deref())
        .bind(changes.last_name.as_deref())
        .bind(changes.avatar.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(DirectoryError::UserNotFound(id))?.into_user()
    }

    async fn update_role(&self, id: UserId, role: UserRole) -> DirectoryResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                role = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, first_name, last_name, avatar, role, created_at, updated_at
            "#,
        )
        .bind(id.get())
        .bind(role.code())
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(DirectoryError::UserNotFound(id))?.into_user()
    }

    async fn delete(&self, id: UserId) -> DirectoryResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, email, first_name, last_name, avatar, role, created_at, updated_at
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(DirectoryError::UserNotFound(id))?.into_user()
    }

    async fn latest(&self, take: i64) -> DirectoryResult<Vec<UserCard>> {
        let rows = sqlx::query_as::<_, UserCardRow>(
            r#"
            SELECT id, first_name, last_name, email, avatar
            FROM users
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(take)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| UserCard {
                id: UserId::new(r.id),
                first_name: r.first_name,
                last_name: r.last_name,
                email: r.email,
                avatar: r.avatar,
            })
            .collect())
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgDirectoryRepository {
    async fn create(&self, post: &NewPost) -> DirectoryResult<PostWithAuthorContact> {
        let row = sqlx::query_as::<_, PostJoinRow>(
            r#"
            WITH inserted AS (
                INSERT INTO posts (title, content, author_user_id)
                VALUES ($1, $2, $3)
                RETURNING id, title, content, author_user_id, created_at, updated_at
            )
            SELECT
                p.id,
                p.title,
                p.content,
                p.author_user_id,
                p.created_at,
                p.updated_at,
                u.email AS author_email,
                u.first_name AS author_first_name,
                u.last_name AS author_last_name,
                u.avatar AS author_avatar,
                u.role AS author_role,
                u.created_at AS author_created_at,
                u.updated_at AS author_updated_at
            FROM inserted p
            JOIN users u ON u.id = p.author_user_id
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author_user_id.get())
        .fetch_one(&self.pool)
        .await?;

        let (post, author) = row.into_parts()?;
        Ok(PostWith {
            author: AuthorContact::from(&author),
            post,
        })
    }

    async fn find_by_id(&self, id: PostId) -> DirectoryResult<Option<PostWithAuthor>> {
        let row = sqlx::query_as::<_, PostJoinRow>(
            r#"
            SELECT
                p.id,
                p.title,
                p.content,
                p.author_user_id,
                p.created_at,
                p.updated_at,
                u.email AS author_email,
                u.first_name AS author_first_name,
                u.last_name AS author_last_name,
                u.avatar AS author_avatar,
                u.role AS author_role,
                u.created_at AS author_created_at,
                u.updated_at AS author_updated_at
            FROM posts p
            JOIN users u ON u.id = p.author_user_id
            WHERE p.id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            let (post, author) = r.into_parts()?;
            Ok(PostWith { post, author })
        })
        .transpose()
    }

    async fn list(
        &self,
        page: PageRequest,
        author: Option<UserId>,
    ) -> DirectoryResult<Vec<PostListItem>> {
        let rows = sqlx::query_as::<_, PostJoinRow>(
            r#"
            SELECT
                p.id,
                p.title,
                p.content,
                p.author_user_id,
                p.created_at,
                p.updated_at,
                u.email AS author_email,
                u.first_name AS author_first_name,
                u.last_name AS author_last_name,
                u.avatar AS author_avatar,
                u.role AS author_role,
                u.created_at AS author_created_at,
                u.updated_at AS author_updated_at
            FROM posts p
            JOIN users u ON u.id = p.author_user_id
            WHERE ($1::INTEGER IS NULL OR p.author_user_id = $1)
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author.map(|a| a.get()))
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                let (post, author) = r.into_parts()?;
                Ok(PostWith {
                    author: AuthorCard::from(&author),
                    post,
                })
            })
            .collect()
    }

    async fn count(&self, author: Option<UserId>) -> DirectoryResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM posts WHERE ($1::INTEGER IS NULL OR author_user_id = $1)",
        )
        .bind(author.map(|a| a.get()))
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    async fn update(&self, id: PostId, changes: &PostChanges) -> DirectoryResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, content, author_user_id, created_at, updated_at
            "#,
        )
        .bind(id.get())
        .bind(changes.title.as_deref())
        .bind(changes.content.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        row.map(PostRow::into_post)
            .ok_or(DirectoryError::PostNotFound(id))
    }

    async fn delete(&self, id: PostId) -> DirectoryResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            DELETE FROM posts
            WHERE id = $1
            RETURNING id, title, content, author_user_id, created_at, updated_at
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(PostRow::into_post)
            .ok_or(DirectoryError::PostNotFound(id))
    }

    async fn delete_by_author(&self, author: UserId) -> DirectoryResult<u64> {
        let deleted = sqlx::query("DELETE FROM posts WHERE author_user_id = $1")
            .bind(author.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    async fn recent(&self, take: i64) -> DirectoryResult<Vec<RecentPost>> {
        let rows = sqlx::query_as::<_, RecentPostRow>(
            r#"
            SELECT
                p.id,
                p.title,
                p.created_at,
                u.first_name AS author_first_name,
                u.last_name AS author_last_name
            FROM posts p
            JOIN users u ON u.id = p.author_user_id
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $1
            "#,
        )
        .bind(take)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| RecentPost {
                id: PostId::new(r.id),
                title: r.title,
                created_at: r.created_at,
                author: AuthorName {
                    first_name: r.author_first_name,
                    last_name: r.author_last_name,
                },
            })
            .collect())
    }
}

// ============================================================================
// Row types
// ============================================================================

fn decode_role(code: &str) -> DirectoryResult<UserRole> {
    UserRole::from_code(code).ok_or_else(|| {
        DirectoryError::Database(sqlx::Error::Decode(
            format!("Invalid role: {}", code).into(),
        ))
    })
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    email: String,
    first_name: String,
    last_name: String,
    avatar: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> DirectoryResult<User> {
        Ok(User {
            id: UserId::new(self.id),
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            avatar: self.avatar,
            role: decode_role(&self.role)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct UserWithCountRow {
    #[sqlx(flatten)]
    user: UserRow,
    post_count: i64,
}

#[derive(sqlx::FromRow)]
struct UserCardRow {
    id: i32,
    first_name: String,
    last_name: String,
    email: String,
    avatar: Option<String>,
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i32,
    title: String,
    content: String,
    author_user_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::new(self.id),
            title: self.title,
            content: self.content,
            author_user_id: UserId::new(self.author_user_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Author columns, prefixed with `author_`
#[derive(sqlx::FromRow)]
struct AuthorRow {
    author_email: String,
    author_first_name: String,
    author_last_name: String,
    author_avatar: Option<String>,
    author_role: String,
    author_created_at: DateTime<Utc>,
    author_updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct PostJoinRow {
    #[sqlx(flatten)]
    post: PostRow,
    #[sqlx(flatten)]
    author: AuthorRow,
}

impl PostJoinRow {
    fn into_parts(self) -> DirectoryResult<(Post, User)> {
        let post = self.post.into_post();
        let a = self.author;
        let author = User {
            id: post.author_user_id,
            email: a.author_email,
            first_name: a.author_first_name,
            last_name: a.author_last_name,
            avatar: a.author_avatar,
            role: decode_role(&a.author_role)?,
            created_at: a.author_created_at,
            updated_at: a.author_updated_at,
        };
        Ok((post, author))
    }
}

#[derive(sqlx::FromRow)]
struct RecentPostRow {
    id: i32,
    title: String,
    created_at: DateTime<Utc>,
    author_first_name: String,
    author_last_name: String,
}
