//! Pagination
//!
//! `skip = (page - 1) * limit`, `lastPage = ceil(total / limit)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_PAGE: i64 = 1_000_000;
pub const MAX_LIMIT: i64 = 100;

/// ページ指定の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("page must be a positive integer (got {0})")]
    InvalidPage(i64),
    #[error("limit must be a positive integer (got {0})")]
    InvalidLimit(i64),
    #[error("page must not exceed 1000000 (got {0})")]
    PageTooLarge(i64),
    #[error("limit must not exceed 100 (got {0})")]
    LimitTooLarge(i64),
}

/// 1 始まりのページ指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Result<Self, PageError> {
        if page < 1 {
            return Err(PageError::InvalidPage(page));
        }
        if limit < 1 {
            return Err(PageError::InvalidLimit(limit));
        }
        if page > MAX_PAGE {
            return Err(PageError::PageTooLarge(page));
        }
        if limit > MAX_LIMIT {
            return Err(PageError::LimitTooLarge(limit));
        }
        Ok(Self { page, limit })
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// 読み飛ばす件数
    #[inline]
    pub fn skip(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// 総件数からメタ情報を組み立てる
    pub fn meta(&self, total: i64) -> PageMeta {
        PageMeta {
            total,
            page: self.page,
            last_page: total.max(0).saturating_add(self.limit - 1) / self.limit,
            limit: self.limit,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// ページングのメタ情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub last_page: i64,
    pub limit: i64,
}

/// ページ単位の結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_formula() {
        assert_eq!(PageRequest::new(1, 10).unwrap().skip(), 0);
        assert_eq!(PageRequest::new(2, 10).unwrap().skip(), 10);
        assert_eq!(PageRequest::new(4, 25).unwrap().skip(), 75);
    }

    #[test]
    fn test_last_page_is_ceiling() {
        let page = PageRequest::new(1, 10).unwrap();
        assert_eq!(page.meta(0).last_page, 0);
        assert_eq!(page.meta(1).last_page, 1);
        assert_eq!(page.meta(10).last_page, 1);
        assert_eq!(page.meta(11).last_page, 2);
        assert_eq!(PageRequest::new(1, 3).unwrap().meta(7).last_page, 3);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert_eq!(PageRequest::new(0, 10), Err(PageError::InvalidPage(0)));
        assert_eq!(PageRequest::new(1, -1), Err(PageError::InvalidLimit(-1)));
    }

    #[test]
    fn test_rejects_oversized_values() {
        assert_eq!(
            PageRequest::new(i64::MAX, 10),
            Err(PageError::PageTooLarge(i64::MAX))
        );
        assert_eq!(
            PageRequest::new(1, i64::MAX),
            Err(PageError::LimitTooLarge(i64::MAX))
        );
        assert_eq!(
            PageRequest::new(1, MAX_LIMIT + 1),
            Err(PageError::LimitTooLarge(MAX_LIMIT + 1))
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let page = PageRequest::new(MAX_PAGE, MAX_LIMIT).unwrap();
        assert_eq!(page.skip(), (MAX_PAGE - 1) * MAX_LIMIT);
        assert_eq!(page.meta(i64::MAX).last_page, i64::MAX / MAX_LIMIT);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let meta = PageRequest::default().meta(42);
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(json["lastPage"], 5);
        assert_eq!(json["limit"], 10);
        assert_eq!(json["page"], 1);
        assert_eq!(json["total"], 42);
    }
}
