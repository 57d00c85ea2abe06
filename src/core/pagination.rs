use serde::Serialize;

/// Width of the page-number window
const WINDOW: u64 = 5;

/// Display metadata for one page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
    pub visible_pages: Vec<u64>,
    pub start_item: u64,
    pub end_item: u64,
    pub total_items: u64,
}

/// Compute pagination metadata
///
/// Pages are 1-based; a page or page size of 0 is treated as 1. The window
/// holds at most five page numbers centered on the current page and is
/// shifted left when it runs into the last page. Item bounds saturate at
/// `u64::MAX`.
pub fn paginate(current_page: u64, total_items: u64, items_per_page: u64) -> Pagination {
    let current_page = current_page.max(1);
    let items_per_page = items_per_page.max(1);

    let total_pages = total_items.div_ceil(items_per_page);

    let mut start_page = current_page.saturating_sub(2).max(1);
    let end_page = total_pages.min(start_page.saturating_add(WINDOW - 1));
    if end_page == total_pages {
        start_page = end_page.saturating_sub(WINDOW - 1).max(1);
    }

    let visible_pages = (start_page..=end_page).collect();

    Pagination {
        current_page,
        total_pages,
        has_next: current_page < total_pages,
        has_prev: current_page > 1,
        visible_pages,
        start_item: (current_page - 1).saturating_mul(items_per_page).saturating_add(1),
        end_item: current_page.saturating_mul(items_per_page).min(total_items),
        total_items,
    }
}

/// Zero-based item offset of a 1-based page, the search `from` parameter
#[inline]
pub fn page_offset(page: u64, page_size: u64) -> u64 {
    (page.max(1) - 1).saturating_mul(page_size)
}

/// The items of one page of a local list
pub fn page_slice<T>(items: &[T], page: u64, page_size: u64) -> &[T] {
    let page_size = page_size.max(1);
    let start = usize::try_from(page_offset(page, page_size)).unwrap_or(usize::MAX);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size as usize).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let p = paginate(1, 100, 10);

        assert_eq!(p.total_pages, 10);
        assert_eq!(p.visible_pages, vec![1, 2, 3, 4, 5]);
        assert_eq!((p.start_item, p.end_item), (1, 10));
        assert!(p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn test_last_page_shifts_window() {
        let p = paginate(10, 100, 10);

        assert_eq!(p.visible_pages, vec![6, 7, 8, 9, 10]);
        assert_eq!((p.start_item, p.end_item), (91, 100));
        assert!(!p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn test_partial_last_page() {
        let p = paginate(6, 55, 10);

        assert_eq!(p.total_pages, 6);
        assert_eq!(p.visible_pages, vec![2, 3, 4, 5, 6]);
        assert_eq!((p.start_item, p.end_item), (51, 55));
    }

    #[test]
    fn test_middle_page_is_centered() {
        let p = paginate(5, 100, 10);
        assert_eq!(p.visible_pages, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_no_items() {
        let p = paginate(1, 0, 12);

        assert_eq!(p.total_pages, 0);
        assert!(p.visible_pages.is_empty());
        assert!(!p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn test_fewer_pages_than_window() {
        let p = paginate(2, 30, 12);

        assert_eq!(p.total_pages, 3);
        assert_eq!(p.visible_pages, vec![1, 2, 3]);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=25).collect();

        assert_eq!(page_slice(&items, 1, 12), &items[0..12]);
        assert_eq!(page_slice(&items, 3, 12), &[25]);
        assert!(page_slice(&items, 4, 12).is_empty());
        assert_eq!(page_offset(3, 12), 24);
    }

    #[test]
    fn test_huge_page_numbers_saturate() {
        let p = paginate(u64::MAX, 10, 1);

        assert_eq!(p.total_pages, 10);
        assert_eq!(p.visible_pages, vec![6, 7, 8, 9, 10]);
        assert!(!p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.end_item, 10);

        let p = paginate(u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.start_item, u64::MAX);

        assert_eq!(page_offset(u64::MAX, 12), u64::MAX);
        assert!(page_slice(&[1, 2, 3], u64::MAX, 2).is_empty());
    }
}
