use serde::{Deserialize, Serialize};

use super::envelope::Pagination;

/// Query parameters accepted by every list endpoint.
///
/// `page` is 1-based on the wire while the grid counts pages from zero;
/// the translation happens here, at the fetch call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PageQuery {
    pub fn from_page_index(page_index: usize, page_size: usize) -> Self {
        Self {
            page: page_index + 1,
            limit: page_size.max(1),
            search: None,
        }
    }

    /// Attach a server-side search term; blank terms are dropped.
    pub fn with_search(mut self, term: &str) -> Self {
        let term = term.trim();
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        };
        self
    }

    /// Query for the page after this one, or `None` on the last page.
    ///
    /// A response without pagination metadata is a complete list.
    pub fn next_after(&self, pagination: Option<&Pagination>) -> Option<Self> {
        let pagination = pagination?;
        let more = pagination.has_next_page || self.page < pagination.page_count();
        more.then(|| Self {
            page: self.page + 1,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_index_maps_to_page_one() {
        let q = PageQuery::from_page_index(0, 20);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 20);
    }

    fn pagination(page: u64, total_pages: u64, has_next_page: bool) -> Pagination {
        Pagination {
            total: total_pages * 1000,
            page,
            limit: 1000,
            total_pages,
            has_next_page,
            has_prev_page: page > 1,
        }
    }

    #[test]
    fn test_next_after_follows_has_next_page() {
        let first = PageQuery::from_page_index(0, 1000).with_search("shirt");
        let second = first.next_after(Some(&pagination(1, 2, true))).unwrap();
        assert_eq!(second.page, 2);
        assert_eq!(second.limit, 1000);
        assert_eq!(second.search.as_deref(), Some("shirt"));
        assert!(second.next_after(Some(&pagination(2, 2, false))).is_none());
    }

    #[test]
    fn test_next_after_without_metadata_stops() {
        assert!(PageQuery::from_page_index(0, 1000).next_after(None).is_none());
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(PageQuery::from_page_index(3, 0).limit, 1);
    }

    #[test]
    fn test_blank_search_is_dropped() {
        assert_eq!(PageQuery::from_page_index(0, 10).with_search("   ").search, None);
        assert_eq!(
            PageQuery::from_page_index(0, 10).with_search(" shirt ").search.as_deref(),
            Some("shirt")
        );
    }
}
