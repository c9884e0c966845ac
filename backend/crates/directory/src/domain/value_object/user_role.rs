use serde::{Deserialize, Serialize};

/// Role of a locally saved user
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    #[display("USER")]
    User,
    #[display("ADMIN")]
    Admin,
}

impl UserRole {
    /// Upstream id that is granted the admin role on import
    pub const ADMIN_IMPORT_ID: i32 = 1;

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USER" => Some(UserRole::User),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Fixed import policy: upstream id 1 becomes ADMIN, everyone else USER
    #[inline]
    pub const fn for_imported_id(id: i32) -> Self {
        if id == Self::ADMIN_IMPORT_ID {
            UserRole::Admin
        } else {
            UserRole::User
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("USER"), Some(UserRole::User));
        assert_eq!(UserRole::from_code("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_code("admin"), None);
        assert_eq!(UserRole::from_code("SUPER_ADMIN"), None);
    }

    #[test]
    fn test_user_role_display_matches_code() {
        assert_eq!(UserRole::User.to_string(), UserRole::User.code());
        assert_eq!(UserRole::Admin.to_string(), UserRole::Admin.code());
    }

    #[test]
    fn test_user_role_serde() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), r#""ADMIN""#);
        let role: UserRole = serde_json::from_str(r#""USER""#).unwrap();
        assert_eq!(role, UserRole::User);
        assert!(serde_json::from_str::<UserRole>(r#""GUEST""#).is_err());
    }

    #[test]
    fn test_import_policy() {
        assert_eq!(UserRole::for_imported_id(1), UserRole::Admin);
        assert_eq!(UserRole::for_imported_id(2), UserRole::User);
        assert_eq!(UserRole::for_imported_id(0), UserRole::User);
    }
}
