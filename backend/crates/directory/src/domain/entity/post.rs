//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use serde::Serialize;

use crate::domain::entity::user::User;

/// Post authored by a saved user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }
}

/// Insert payload; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_user_id: UserId,
}

/// Partial post update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Post joined with some projection of its author
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostWith<A> {
    #[serde(flatten)]
    pub post: Post,
    pub author: A,
}

/// Author summary returned after creating a post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorContact {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for AuthorContact {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Author summary shown in post listings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCard {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
}

impl From<&User> for AuthorCard {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

pub type PostWithAuthorContact = PostWith<AuthorContact>;
pub type PostListItem = PostWith<AuthorCard>;
pub type PostWithAuthor = PostWith<User>;

/// Author name only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorName {
    pub first_name: String,
    pub last_name: String,
}

/// Dashboard row for the most recent posts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPost {
    pub id: PostId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub author: AuthorName,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_role::UserRole;

    #[test]
    fn test_post_with_author_flattens() {
        let now = Utc::now();
        let author = User {
            id: UserId::new(4),
            email: "eve.holt@reqres.in".to_string(),
            first_name: "Eve".to_string(),
            last_name: "Holt".to_string(),
            avatar: None,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        };
        let item = PostListItem {
            post: Post {
                id: PostId::new(10),
                title: "Hello".to_string(),
                content: "First post".to_string(),
                author_user_id: author.id,
                created_at: now,
                updated_at: now,
            },
            author: AuthorCard::from(&author),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 10);
        assert_eq!(json["authorUserId"], 4);
        assert_eq!(json["author"]["firstName"], "Eve");
        assert!(json["author"].get("email").is_none());
    }

    #[test]
    fn test_apply_changes() {
        let now = Utc::now();
        let mut post = Post {
            id: PostId::new(1),
            title: "Old".to_string(),
            content: "Old content".to_string(),
            author_user_id: UserId::new(1),
            created_at: now,
            updated_at: now,
        };
        post.apply(PostChanges {
            content: Some("New content".to_string()),
            ..Default::default()
        });
        assert_eq!(post.title, "Old");
        assert_eq!(post.content, "New content");
    }
}
