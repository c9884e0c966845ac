//! Reconciled Identity
//!
//! The user shown after a successful ReqRes login, resolved from the local
//! store, from ReqRes itself, or synthesized from the email.

use directory::models::{User, UserRole};
use platform::reqres::ExternalIdentity;
use serde::Serialize;

/// Avatar of a synthesized identity
pub const FALLBACK_AVATAR: &str = "https://reqres.in/img/faces/1-image.jpg";

/// Where the identity was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MatchSource {
    #[display("local")]
    Local,
    #[display("reqres")]
    External,
    #[display("fallback")]
    Fallback,
}

/// Result of identity resolution
#[derive(Debug, Clone, PartialEq)]
pub enum ReconciledIdentity {
    /// Saved user with the same email; role as stored
    LocalMatch(User),
    /// ReqRes user with the same email; ReqRes has no roles
    ExternalMatch(ExternalIdentity),
    /// Nothing matched
    Fallback { email: String },
}

impl ReconciledIdentity {
    pub fn source(&self) -> MatchSource {
        match self {
            ReconciledIdentity::LocalMatch(_) => MatchSource::Local,
            ReconciledIdentity::ExternalMatch(_) => MatchSource::External,
            ReconciledIdentity::Fallback { .. } => MatchSource::Fallback,
        }
    }

    pub fn into_login_user(self) -> LoginUser {
        match self {
            ReconciledIdentity::LocalMatch(user) => LoginUser {
                id: user.id.get(),
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
                avatar: user.avatar,
                role: Some(user.role),
            },
            ReconciledIdentity::ExternalMatch(remote) => LoginUser {
                id: remote.id,
                email: remote.email,
                first_name: remote.first_name,
                last_name: remote.last_name,
                avatar: Some(remote.avatar),
                role: None,
            },
            ReconciledIdentity::Fallback { email } => {
                let local_part = email.split('@').next().unwrap_or_default().to_string();
                LoginUser {
                    id: 0,
                    email,
                    first_name: local_part,
                    last_name: String::new(),
                    avatar: Some(FALLBACK_AVATAR.to_string()),
                    role: Some(UserRole::User),
                }
            }
        }
    }
}

/// Login response user, in ReqRes' snake_case shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginUser {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}
