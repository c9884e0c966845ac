//! Response Envelope
//!
//! Every HTTP response body, successful or not, has the same shape:
//! `{ success, message, code, data? }`.

use std::borrow::Cow;

use serde::Serialize;

/// 成功時のデフォルトメッセージ
pub const SUCCESS_MESSAGE: &str = "Success";

/// レスポンスエンベロープ
///
/// ## Examples
/// ```rust
/// use kernel::response::ApiResponse;
///
/// let res = ApiResponse::success(42);
/// assert!(res.success);
/// assert_eq!(res.code, 200);
/// assert_eq!(res.data, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    /// リクエストが成功したかどうか
    pub success: bool,
    /// 結果の説明
    pub message: Cow<'static, str>,
    /// HTTP ステータスコード
    pub code: u16,
    /// 返却データ（エラー時は省略）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 OK で `data` を包む
    pub fn success(data: T) -> Self {
        Self::with_code(data, 200)
    }

    /// 201 Created で `data` を包む
    pub fn created(data: T) -> Self {
        Self::with_code(data, 201)
    }

    fn with_code(data: T, code: u16) -> Self {
        Self {
            success: true,
            message: Cow::Borrowed(SUCCESS_MESSAGE),
            code,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// 失敗時のエンベロープ
    pub fn error(message: impl Into<Cow<'static, str>>, code: u16) -> Self {
        Self {
            success: false,
            message: message.into(),
            code,
            data: None,
        }
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_serialization() {
        let json = serde_json::to_value(ApiResponse::success("Hello World!")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "message": "Success",
                "code": 200,
                "data": "Hello World!"
            })
        );
    }

    #[test]
    fn test_created_envelope() {
        let res = ApiResponse::created(1);
        assert_eq!(res.code, 201);
        assert!(res.success);
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::error("Not here", 404)).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], 404);
        assert_eq!(json["message"], "Not here");
        assert!(json.get("data").is_none());
    }
}
