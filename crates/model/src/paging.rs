//! Paging request and response shapes

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not pick one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Pagination part of a request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPaging {
    /// 1-based page number
    pub page_num: u32,
    pub page_size: u32,
}

impl RequestPaging {
    pub fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num: page_num.max(1),
            page_size: page_size.max(1),
        }
    }
}

impl Default for RequestPaging {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingData<T> {
    pub page_num: u32,
    pub page_size: u32,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> PagingData<T> {
    /// Number of pages implied by `total` and `page_size`
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }

    /// Whether a page after this one exists
    pub fn has_next(&self) -> bool {
        u64::from(self.page_num) < self.page_count()
    }
}

/// Body of `POST /app/share/getModels`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSearch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    #[serde(flatten)]
    pub paging: RequestPaging,
}

impl ShareSearch {
    pub fn new(search_text: Option<String>, paging: RequestPaging) -> Self {
        // Blank search text means "no filter"
        let search_text = search_text.filter(|s| !s.trim().is_empty());
        Self {
            search_text,
            paging,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_paging_clamps_to_one() {
        assert_eq!(RequestPaging::new(0, 0), RequestPaging::new(1, 1));
        assert_eq!(RequestPaging::default().page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_share_search_body() {
        let search = ShareSearch::new(Some("bot".to_string()), RequestPaging::new(2, 10));
        assert_eq!(
            serde_json::to_value(&search).unwrap(),
            json!({"searchText": "bot", "pageNum": 2, "pageSize": 10})
        );

        let blank = ShareSearch::new(Some("  ".to_string()), RequestPaging::default());
        assert_eq!(
            serde_json::to_value(&blank).unwrap(),
            json!({"pageNum": 1, "pageSize": 20})
        );
    }

    #[test]
    fn test_page_count() {
        let page: PagingData<u8> = serde_json::from_value(json!({
            "pageNum": 1, "pageSize": 10, "data": [1, 2], "total": 21
        }))
        .unwrap();
        assert_eq!(page.page_count(), 3);
        assert!(page.has_next());

        let last = PagingData::<u8> {
            page_num: 3,
            ..page
        };
        assert!(!last.has_next());
    }
}
