//! API DTOs (Data Transfer Objects)

use directory::models::Email;
use kernel::error::app_error::{AppError, AppResult};
use serde::Deserialize;

use crate::application::LoginInput;

const PASSWORD_MIN_CHARS: usize = 4;

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(self) -> AppResult<LoginInput> {
        let email = Email::new(self.email)?;

        if self.password.is_empty() {
            return Err(AppError::bad_request("Password is required"));
        }
        if self.password.chars().count() < PASSWORD_MIN_CHARS {
            return Err(AppError::bad_request(format!(
                "Password must be at least {} characters",
                PASSWORD_MIN_CHARS
            )));
        }

        Ok(LoginInput {
            email: email.into_inner(),
            password: self.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_request_validation() {
        let input = request("eve.holt@reqres.in", "cityslicka").validate().unwrap();
        assert_eq!(input.email, "eve.holt@reqres.in");

        assert!(request("not-an-email", "cityslicka").validate().is_err());
        assert!(request("eve.holt@reqres.in", "").validate().is_err());
        assert!(request("eve.holt@reqres.in", "abc").validate().is_err());
        assert!(request("eve.holt@reqres.in", "abcd").validate().is_ok());
    }

    #[test]
    fn test_login_request_rejects_unknown_fields() {
        let result = serde_json::from_str::<LoginRequest>(
            r#"{"email":"a@b.com","password":"pass","role":"ADMIN"}"#,
        );
        assert!(result.is_err());
    }
}
