//! User Entity
//!
//! A ReqRes user that has been imported into the local store.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::reqres::ExternalIdentity;
use serde::Serialize;

use crate::domain::entity::post::Post;
use crate::domain::value_object::user_role::UserRole;

/// Locally saved user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Same id as the upstream ReqRes record
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Apply the supplied fields of a partial update
    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(avatar) = changes.avatar {
            self.avatar = Some(avatar);
        }
        self.updated_at = Utc::now();
    }

    pub fn card(&self) -> UserCard {
        UserCard {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Insert payload for an imported user
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
    pub role: UserRole,
}

impl NewUser {
    /// Build from an upstream record
    ///
    /// The stored id is the upstream id; the role is decided by the id that
    /// was requested.
    pub fn from_external(remote: ExternalIdentity, requested_id: i32) -> Self {
        let avatar = (!remote.avatar.is_empty()).then_some(remote.avatar);
        Self {
            id: UserId::new(remote.id),
            email: remote.email,
            first_name: remote.first_name,
            last_name: remote.last_name,
            avatar,
            role: UserRole::for_imported_id(requested_id),
        }
    }
}

/// Partial profile update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.avatar.is_none()
    }
}

/// `_count` relation counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostCount {
    pub posts: i64,
}

/// Listing row: user plus number of authored posts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserWithPostCount {
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "_count")]
    pub count: PostCount,
}

/// Detail view: user plus all authored posts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserWithPosts {
    #[serde(flatten)]
    pub user: User,
    pub posts: Vec<Post>,
}

/// Compact user summary shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCard {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(id: i32) -> ExternalIdentity {
        ExternalIdentity {
            id,
            email: "janet.weaver@reqres.in".to_string(),
            first_name: "Janet".to_string(),
            last_name: "Weaver".to_string(),
            avatar: "https://reqres.in/img/faces/2-image.jpg".to_string(),
        }
    }

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: UserId::new(2),
            email: "janet.weaver@reqres.in".to_string(),
            first_name: "Janet".to_string(),
            last_name: "Weaver".to_string(),
            avatar: None,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_new_user_from_external() {
        let new_user = NewUser::from_external(remote(2), 2);
        assert_eq!(new_user.id, UserId::new(2));
        assert_eq!(new_user.role, UserRole::User);
        assert_eq!(
            new_user.avatar.as_deref(),
            Some("https://reqres.in/img/faces/2-image.jpg")
        );

        let admin = NewUser::from_external(remote(1), 1);
        assert_eq!(admin.role, UserRole::Admin);
    }

    #[test]
    fn test_new_user_empty_avatar_is_none() {
        let mut record = remote(3);
        record.avatar.clear();
        assert_eq!(NewUser::from_external(record, 3).avatar, None);
    }

    #[test]
    fn test_apply_only_supplied_fields() {
        let mut user = sample_user();
        user.apply(UserChanges {
            first_name: Some("Jan".to_string()),
            ..Default::default()
        });

        assert_eq!(user.first_name, "Jan");
        assert_eq!(user.last_name, "Weaver");
        assert_eq!(user.email, "janet.weaver@reqres.in");
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let json = serde_json::to_value(UserWithPostCount {
            user: sample_user(),
            count: PostCount { posts: 3 },
        })
        .unwrap();

        assert_eq!(json["id"], 2);
        assert_eq!(json["firstName"], "Janet");
        assert_eq!(json["role"], "USER");
        assert!(json["avatar"].is_null());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["_count"]["posts"], 3);
    }
}
