//! Domain Value Objects

/// Default page size for item listings
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound on client-requested page sizes
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validated listing filter: exact-match category/condition, free-text
/// search over title and description, and 1-indexed page-based pagination.
#[derive(Debug, Clone)]
pub struct ItemFilter {
    pub category: Option<String>,
    pub condition: Option<String>,
    pub search: Option<String>,
    limit: u32,
    page: u32,
}

impl ItemFilter {
    pub fn new(
        category: Option<String>,
        condition: Option<String>,
        search: Option<String>,
        limit: Option<u32>,
        page: Option<u32>,
    ) -> Self {
        Self {
            category: normalize(category),
            condition: normalize(condition),
            search: normalize(search),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            page: page.unwrap_or(1).max(1),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Rows to skip: `(page - 1) * limit`
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self::new(None, None, None, None, None)
    }
}

/// Treat blank filter values as absent
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let filter = ItemFilter::default();
        assert_eq!(filter.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(filter.page(), 1);
        assert_eq!(filter.offset(), 0);
    }

    #[test]
    fn test_offset_computation() {
        let filter = ItemFilter::new(None, None, None, Some(2), Some(2));
        assert_eq!(filter.offset(), 2);

        let filter = ItemFilter::new(None, None, None, Some(20), Some(3));
        assert_eq!(filter.offset(), 40);
    }

    #[test]
    fn test_limit_clamping() {
        let filter = ItemFilter::new(None, None, None, Some(0), None);
        assert_eq!(filter.limit(), 1);

        let filter = ItemFilter::new(None, None, None, Some(10_000), None);
        assert_eq!(filter.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_page_floor() {
        let filter = ItemFilter::new(None, None, None, None, Some(0));
        assert_eq!(filter.page(), 1);
    }

    #[test]
    fn test_blank_filters_are_absent() {
        let filter = ItemFilter::new(
            Some("".to_string()),
            Some("  ".to_string()),
            Some("bike".to_string()),
            None,
            None,
        );
        assert!(filter.category.is_none());
        assert!(filter.condition.is_none());
        assert_eq!(filter.search.as_deref(), Some("bike"));
    }
}
