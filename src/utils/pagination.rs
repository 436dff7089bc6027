use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

/// Fixed page size for all question listings.
pub const QUESTIONS_PER_PAGE: usize = 10;

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// `?page=N` query parameter. 1-based; absent or empty means page 1.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
}

impl PageQuery {
    /// Resolved page number, clamped to 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// Returns the 10-item window of `items` for the given 1-based page.
///
/// An out-of-range page yields an empty slice rather than an error;
/// callers decide whether empty means not-found.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    let start = (page.max(1) - 1) as usize * QUESTIONS_PER_PAGE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_default() {
        let q = PageQuery::default();
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn test_page_query_clamps_below_one() {
        let q = PageQuery { page: Some(0) };
        assert_eq!(q.page(), 1);
        let q = PageQuery { page: Some(-3) };
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn test_page_query_deserialize_from_string() {
        let q: PageQuery = serde_json::from_str(r#"{"page":"4"}"#).unwrap();
        assert_eq!(q.page(), 4);
    }

    #[test]
    fn test_page_query_deserialize_empty_string() {
        let q: PageQuery = serde_json::from_str(r#"{"page":""}"#).unwrap();
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn test_paginate_first_page() {
        let items: Vec<i32> = (0..25).collect();
        assert_eq!(paginate(&items, 1), &(0..10).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn test_paginate_middle_page_is_contiguous() {
        let items: Vec<i32> = (0..25).collect();
        assert_eq!(paginate(&items, 2), &(10..20).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let items: Vec<i32> = (0..25).collect();
        assert_eq!(paginate(&items, 3), &(20..25).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<i32> = (0..25).collect();
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, 100).is_empty());
    }

    #[test]
    fn test_paginate_empty_input() {
        let items: Vec<i32> = vec![];
        assert!(paginate(&items, 1).is_empty());
    }

    #[test]
    fn test_paginate_never_exceeds_page_size() {
        let items: Vec<i32> = (0..95).collect();
        for page in 1..=10 {
            assert!(paginate(&items, page).len() <= QUESTIONS_PER_PAGE);
        }
    }
}
