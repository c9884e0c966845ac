//! ReqRes wire models

use serde::{Deserialize, Serialize};

/// Opaque token returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

/// User record as served by ReqRes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    pub id: i32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub avatar: String,
}

/// Login request body
#[derive(Debug, Serialize)]
pub(crate) struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `GET /users?page=n` body; paging fields are ignored
#[derive(Debug, Deserialize)]
pub(crate) struct UserPage {
    #[serde(default)]
    pub data: Vec<ExternalIdentity>,
}

/// `GET /users/{id}` body
#[derive(Debug, Deserialize)]
pub(crate) struct SingleUser {
    pub data: Option<ExternalIdentity>,
}
