use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page envelope matching the shape the admin/moderator UI consumes:
/// `current_page`, `last_page`, `per_page`, `total` and absolute
/// next/previous page URLs (null at either end).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64, current_page: u32, per_page: u32, base_path: &str) -> Self {
        let last_page = if per_page == 0 {
            1
        } else {
            (total.div_ceil(u64::from(per_page)) as u32).max(1)
        };
        let next_page_url = (current_page < last_page)
            .then(|| format!("{base_path}?page={}", current_page + 1));
        let prev_page_url =
            (current_page > 1).then(|| format!("{base_path}?page={}", current_page - 1));

        Self {
            data,
            current_page,
            last_page,
            per_page,
            total,
            next_page_url,
            prev_page_url,
        }
    }
}

/// Cursor-keyed page for the raw audit export.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl<T> CursorPage<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        let has_more = next_cursor.is_some();
        Self {
            items,
            next_cursor,
            has_more,
        }
    }
}
