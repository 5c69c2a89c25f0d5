use serde::Serialize;

/// Number of records shown per page in operator listings.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Page request; `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Saturates at `i64::MAX` for page numbers past any real result set.
    pub fn offset(&self) -> i64 {
        let offset = (self.page.max(1) - 1).saturating_mul(self.per_page);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        i64::try_from(self.per_page).unwrap_or(i64::MAX)
    }
}

/// A single page of items together with paging metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub pages: usize,
    pub total: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total: usize, per_page: usize) -> Self {
        Self {
            items,
            page,
            pages: total.div_ceil(per_page.max(1)),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_treats_page_zero_as_first_page() {
        let pagination = Pagination { page: 0, per_page: 20 };
        assert_eq!(pagination.offset(), 0);
        let pagination = Pagination { page: 3, per_page: 20 };
        assert_eq!(pagination.offset(), 40);
    }

    #[test]
    fn offset_saturates_for_huge_pages() {
        let pagination = Pagination {
            page: usize::MAX,
            per_page: 20,
        };
        assert_eq!(pagination.offset(), i64::MAX);
        assert_eq!(pagination.limit(), 20);
    }

    #[test]
    fn page_count_rounds_up() {
        let page = Paginated::new(vec![1, 2, 3], 1, 41, 20);
        assert_eq!(page.pages, 3);
    }
}
