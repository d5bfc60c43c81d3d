//! Page-number pagination for public listings and the gallery.
//!
//! Lookup is forgiving: a page parameter that is not a number yields the
//! first page, and one that is out of range yields the last page. An empty
//! collection still has one (empty) page.

use serde::Serialize;

/// Published insights per blog overview page.
pub const INSIGHTS_PER_PAGE: i64 = 12;

/// Assets per gallery page.
pub const GALLERY_PER_PAGE: i64 = 24;

/// A resolved page of a collection of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub number: i64,
    pub per_page: i64,
    pub total: i64,
    pub num_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Page {
    /// Resolve the raw `?page=` value against a collection size.
    pub fn resolve(raw: Option<&str>, per_page: i64, total: i64) -> Self {
        let per_page = per_page.max(1);
        let total = total.max(0);
        let num_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };

        let number = match raw.map(str::trim).map(str::parse::<i64>) {
            None | Some(Err(_)) => 1,
            Some(Ok(n)) if n < 1 || n > num_pages => num_pages,
            Some(Ok(n)) => n,
        };

        Self {
            number,
            per_page,
            total,
            num_pages,
            has_next: number < num_pages,
            has_previous: number > 1,
        }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.per_page
    }

    /// Maximum number of rows on this page.
    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

/// A page of items together with its position.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub page: Page,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_page_is_first() {
        let page = Page::resolve(None, 12, 30);
        assert_eq!(page.number, 1);
        assert_eq!(page.num_pages, 3);
        assert_eq!(page.offset(), 0);
        assert!(page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn non_numeric_page_is_first() {
        assert_eq!(Page::resolve(Some("abc"), 12, 30).number, 1);
    }

    #[test]
    fn out_of_range_pages_clamp_to_last() {
        assert_eq!(Page::resolve(Some("99"), 12, 30).number, 3);
        assert_eq!(Page::resolve(Some("0"), 12, 30).number, 3);
        assert_eq!(Page::resolve(Some("-2"), 12, 30).number, 3);
    }

    #[test]
    fn middle_page_offsets() {
        let page = Page::resolve(Some("2"), 24, 50);
        assert_eq!(page.offset(), 24);
        assert_eq!(page.limit(), 24);
        assert!(page.has_next && page.has_previous);
    }

    #[test]
    fn empty_collection_has_one_page() {
        let page = Page::resolve(Some("5"), 12, 0);
        assert_eq!(page.number, 1);
        assert_eq!(page.num_pages, 1);
        assert!(!page.has_next);
    }

    #[test]
    fn exact_multiple() {
        assert_eq!(Page::resolve(None, 12, 24).num_pages, 2);
    }
}
