use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
    pub total_pages: Option<i64>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let per_page = per_page.max(1);
        // Even an empty listing has one (empty) page.
        let total_pages = (total.max(0) as u64).div_ceil(per_page as u64).max(1) as i64;
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
            total_pages: Some(total_pages),
        }
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            per_page: None,
            total: None,
            total_pages: None,
        }
    }
}

/// Canonical deep links for a listing page. The query strings are produced by
/// the listing serializer, so loading any of them reproduces the exact view.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct PageLinks {
    #[serde(rename = "self")]
    pub current: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_rounds_total_pages_up() {
        let meta = Meta::new(1, 12, 25);
        assert_eq!(meta.total_pages, Some(3));
    }

    #[test]
    fn meta_has_at_least_one_page() {
        let meta = Meta::new(1, 12, 0);
        assert_eq!(meta.total_pages, Some(1));
    }
}
