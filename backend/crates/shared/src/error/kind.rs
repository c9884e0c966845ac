//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// エラー種別の列挙体
///
/// サービス全体で共有するエラー分類を定義します。
/// 各バリアントは HTTP ステータスコードにマッピングされ、
/// レスポンスエンベロープの `code` フィールドとして返されます。
///
/// ## Notes
/// * 複数の種別が同じステータスコードを共有します（5xx 系）
/// * `Unclassified` のメッセージは呼び出し元に公開されません
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: リクエストが不正（バリデーション違反など）
    BadRequest,
    /// 401 - Unauthorized: 上流の認証に失敗
    Unauthorized,
    /// 403 - Forbidden: 認可ルール違反
    Forbidden,
    /// 404 - Not Found: 参照先のエンティティが存在しない
    NotFound,
    /// 409 - Conflict: 一意性制約の違反
    Conflict,
    /// 500 - 必須の外部設定が欠落している
    Misconfigured,
    /// 500 - 上流サービスへの到達・応答に失敗
    UpstreamUnavailable,
    /// 500 - 上流サービスの応答が利用できない形式
    BadUpstreamPayload,
    /// 500 - 上記以外のすべての失敗
    Unclassified,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    /// assert_eq!(ErrorKind::Misconfigured.status_code(), 500);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Misconfigured
            | ErrorKind::UpstreamUnavailable
            | ErrorKind::BadUpstreamPayload
            | ErrorKind::Unclassified => 500,
        }
    }

    /// ログ向けの文字列表現を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Misconfigured => "Misconfigured",
            ErrorKind::UpstreamUnavailable => "Upstream Unavailable",
            ErrorKind::BadUpstreamPayload => "Bad Upstream Payload",
            ErrorKind::Unclassified => "Internal Server Error",
        }
    }

    /// サーバー側のエラーかどうかを判定
    ///
    /// 5xx系のエラーは `true` を返します。
    /// これらのエラーはログに記録すべきです。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// クライアント側のエラーかどうかを判定
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }

    /// メッセージをそのまま呼び出し元へ返してよいか
    ///
    /// `Unclassified` は内部の詳細を含み得るため、汎用メッセージに置き換えます。
    #[inline]
    pub const fn exposes_message(&self) -> bool {
        !matches!(self, ErrorKind::Unclassified)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
