use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;
pub const DEFAULT_SORT_FIELD: &str = "created_at";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Anything other than `asc`/`desc` falls back to `desc`.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

pub(crate) fn normalize_page(page: i64) -> i64 {
    if page < 1 { 1 } else { page }
}

pub(crate) fn normalize_limit(limit: i64) -> i64 {
    if (1..=MAX_PAGE_SIZE).contains(&limit) {
        limit
    } else {
        DEFAULT_PAGE_SIZE
    }
}

pub(crate) fn normalize_offset(offset: i64) -> i64 {
    offset.max(0)
}

pub(crate) fn normalize_sort_dir(raw: &str) -> String {
    match SortDirection::parse_or_default(raw) {
        SortDirection::Asc => "asc".to_string(),
        SortDirection::Desc => "desc".to_string(),
    }
}

pub(crate) fn normalize_sort_by(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_SORT_FIELD.to_string()
    } else {
        trimmed.to_string()
    }
}

pub(crate) fn normalize_search(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
