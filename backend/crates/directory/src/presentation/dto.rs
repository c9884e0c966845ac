//! API DTOs (Data Transfer Objects)
//!
//! Request bodies reject unknown fields; `validate` turns them into
//! domain inputs or a `BadRequest` naming the first violated rule.

use kernel::error::app_error::{AppError, AppResult};
use kernel::id::UserId;
use kernel::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest};
use serde::Deserialize;

use crate::domain::entity::post::{NewPost, PostChanges};
use crate::domain::entity::user::UserChanges;
use crate::domain::value_object::email::Email;
use crate::domain::value_object::user_role::UserRole;

const NAME_MIN_CHARS: usize = 2;
const TITLE_MIN_CHARS: usize = 3;
const CONTENT_MIN_CHARS: usize = 5;

fn require_min_chars(field: &str, value: &str, min: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(format!("{} must not be empty", field)));
    }
    if value.chars().count() < min {
        return Err(AppError::bad_request(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

fn require_http_url(field: &str, value: &str) -> AppResult<()> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    let host = rest.and_then(|r| r.split(['/', '?', '#']).next());

    match host {
        Some(h) if !h.is_empty() && !h.contains(char::is_whitespace) => Ok(()),
        _ => Err(AppError::bad_request(format!("{} must be a valid URL", field))),
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// `?page=&limit=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageQuery {
    pub fn to_page_request(&self) -> AppResult<PageRequest> {
        Ok(PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.limit.unwrap_or(DEFAULT_LIMIT),
        )?)
    }
}

/// `?page=&limit=&userId=`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub user_id: Option<String>,
}

impl PostListQuery {
    pub fn to_page_request(&self) -> AppResult<PageRequest> {
        PageQuery {
            page: self.page,
            limit: self.limit,
        }
        .to_page_request()
    }

    /// Lenient author filter: unparsable or zero means "all authors"
    pub fn author(&self) -> Option<UserId> {
        self.user_id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .filter(|id| *id != 0)
            .map(UserId::new)
    }
}

// ============================================================================
// Users
// ============================================================================

/// `DELETE /users/saved/{id}?adminId=`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminQuery {
    pub admin_id: i32,
}

/// Partial profile update request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(self) -> AppResult<UserChanges> {
        let email = self
            .email
            .map(|e| Email::new(e).map(Email::into_inner))
            .transpose()?;
        if let Some(first_name) = &self.first_name {
            require_min_chars("firstName", first_name, NAME_MIN_CHARS)?;
        }
        if let Some(last_name) = &self.last_name {
            require_min_chars("lastName", last_name, NAME_MIN_CHARS)?;
        }
        if let Some(avatar) = &self.avatar {
            require_http_url("avatar", avatar)?;
        }

        Ok(UserChanges {
            email,
            first_name: self.first_name,
            last_name: self.last_name,
            avatar: self.avatar,
        })
    }
}

/// Role change request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateRoleRequest {
    pub role: UserRole,
    /// Acting admin
    pub admin_id: i32,
}

// ============================================================================
// Posts
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author_user_id: i32,
}

impl CreatePostRequest {
    pub fn validate(self) -> AppResult<NewPost> {
        require_min_chars("title", &self.title, TITLE_MIN_CHARS)?;
        require_min_chars("content", &self.content, CONTENT_MIN_CHARS)?;

        Ok(NewPost {
            title: self.title,
            content: self.content,
            author_user_id: UserId::new(self.author_user_id),
        })
    }
}

/// Partial post update request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn validate(self) -> AppResult<PostChanges> {
        if let Some(title) = &self.title {
            require_min_chars("title", title, TITLE_MIN_CHARS)?;
        }
        if let Some(content) = &self.content {
            require_min_chars("content", content, CONTENT_MIN_CHARS)?;
        }

        Ok(PostChanges {
            title: self.title,
            content: self.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_page_query_defaults() {
        let page = PageQuery::default().to_page_request().unwrap();
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn test_page_query_rejects_zero_limit() {
        let err = PageQuery {
            page: Some(1),
            limit: Some(0),
        }
        .to_page_request()
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_post_list_author_is_lenient() {
        let query = |raw: &str| PostListQuery {
            user_id: Some(raw.to_string()),
            ..Default::default()
        };
        assert_eq!(query("3").author(), Some(UserId::new(3)));
        assert_eq!(query("abc").author(), None);
        assert_eq!(query("0").author(), None);
        assert_eq!(PostListQuery::default().author(), None);
    }

    #[test]
    fn test_update_user_validation() {
        let ok = UpdateUserRequest {
            email: Some("new@reqres.in".to_string()),
            avatar: Some("https://reqres.in/img/faces/3-image.jpg".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(ok.email.as_deref(), Some("new@reqres.in"));

        let bad_email = UpdateUserRequest {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(bad_email.validate().is_err());

        let short_name = UpdateUserRequest {
            first_name: Some("J".to_string()),
            ..Default::default()
        };
        let err = short_name.validate().unwrap_err();
        assert!(err.message().contains("firstName"));

        let bad_avatar = UpdateUserRequest {
            avatar: Some("ftp://example.com/a.png".to_string()),
            ..Default::default()
        };
        assert!(bad_avatar.validate().is_err());
    }

    #[test]
    fn test_update_user_rejects_unknown_fields() {
        let result =
            serde_json::from_str::<UpdateUserRequest>(r#"{"firstName":"Jo","role":"ADMIN"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_post_validation() {
        let request = |title: &str, content: &str| CreatePostRequest {
            title: title.to_string(),
            content: content.to_string(),
            author_user_id: 1,
        };

        assert!(request("Hello", "Some content").validate().is_ok());
        assert!(request("Hi", "Some content").validate().is_err());
        assert!(request("Hello", "tiny").validate().is_err());
        assert!(request("   ", "Some content").validate().is_err());
    }

    #[test]
    fn test_update_role_request_rejects_unknown_role() {
        assert!(
            serde_json::from_str::<UpdateRoleRequest>(r#"{"role":"ROOT","adminId":1}"#).is_err()
        );
        let ok: UpdateRoleRequest =
            serde_json::from_str(r#"{"role":"ADMIN","adminId":1}"#).unwrap();
        assert_eq!(ok.role, UserRole::Admin);
    }
}
