//! Page arithmetic
//!
//! Maps a contiguous range of listing positions onto the pages of a
//! fixed-size, zero-indexed paginated listing, and maps each of those pages
//! back onto the slice of its own positions that falls inside the range.
//!
//! ```text
//!  positions   0 1 2 3 4 | 5 6 7 8 9 | 10 11 12 13 14
//!  pages       ---- 0 ---- ---- 1 ---- ----- 2 ------
//!  range             [3 ............................ 11)
//!  windows          (3,5)     (0,5)      (0,1)
//! ```

use crate::error::ReportError;
use std::ops::{Range, RangeInclusive};

/// A requested window over the listing: `count` positions from `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrRange {
    pub start: u64,
    pub count: u64,
}

impl PrRange {
    /// Create a range, rejecting an empty one
    pub fn new(start: u64, count: u64) -> Result<Self, ReportError> {
        if count == 0 {
            return Err(ReportError::EmptyRange);
        }
        if start.checked_add(count).is_none() {
            return Err(ReportError::RangeOverflow { start, count });
        }
        Ok(Self { start, count })
    }

    /// One past the last requested position
    pub fn end(&self) -> u64 {
        self.start + self.count
    }

    /// Requested positions as a half-open range
    pub fn positions(&self) -> Range<u64> {
        self.start..self.end()
    }
}

/// Inclusive, zero-indexed span of pages covering a `PrRange`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub start_page: u64,
    pub end_page: u64,
}

impl PageBounds {
    /// Every page index in the span, in listing order
    pub fn pages(&self) -> RangeInclusive<u64> {
        self.start_page..=self.end_page
    }
}

/// Half-open slice `[local_start, local_end)` of positions within one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub local_start: u64,
    pub local_end: u64,
}

impl PageWindow {
    /// Whether the in-page position `index` lies inside the window
    pub fn contains(&self, index: u64) -> bool {
        self.local_start <= index && index < self.local_end
    }

    /// Number of positions in the window
    pub fn len(&self) -> u64 {
        self.local_end - self.local_start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Smallest span of pages whose concatenation holds every position of `range`
///
/// `page_size` must be at least 1.
pub fn compute_page_bounds(range: PrRange, page_size: u64) -> PageBounds {
    debug_assert!(page_size >= 1, "page size must be at least 1");

    PageBounds {
        start_page: range.start / page_size,
        end_page: (range.start + range.count - 1) / page_size,
    }
}

/// Last zero-indexed page the API can address, its page numbers being `u32`
/// counted from 1
pub const LAST_ADDRESSABLE_PAGE: u64 = u32::MAX as u64 - 1;

/// `compute_page_bounds`, rejecting a span that ends past
/// `LAST_ADDRESSABLE_PAGE`
pub fn addressable_page_bounds(
    range: PrRange,
    page_size: u64,
) -> Result<PageBounds, ReportError> {
    let bounds = compute_page_bounds(range, page_size);
    if bounds.end_page > LAST_ADDRESSABLE_PAGE {
        return Err(ReportError::PageOutOfRange(bounds.end_page));
    }
    Ok(bounds)
}

/// Positions of page `page` that belong to `range`
///
/// `page` must lie within `compute_page_bounds(range, page_size)`.
pub fn compute_page_window(page: u64, range: PrRange, page_size: u64) -> PageWindow {
    let bounds = compute_page_bounds(range, page_size);

    // A single-page range is both the first and the last page, so the two
    // edges are checked independently.
    let local_start = if page == bounds.start_page {
        range.start % page_size
    } else {
        0
    };

    let local_end = if page == bounds.end_page {
        match range.end() % page_size {
            0 => page_size,
            remainder => remainder,
        }
    } else {
        page_size
    };

    PageWindow {
        local_start,
        local_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u64, count: u64) -> PrRange {
        PrRange::new(start, count).unwrap()
    }

    fn bounds(start_page: u64, end_page: u64) -> PageBounds {
        PageBounds {
            start_page,
            end_page,
        }
    }

    fn window(local_start: u64, local_end: u64) -> PageWindow {
        PageWindow {
            local_start,
            local_end,
        }
    }

    #[test]
    fn test_empty_range_is_rejected() {
        assert!(matches!(PrRange::new(3, 0), Err(ReportError::EmptyRange)));
    }

    #[test]
    fn test_overflowing_range_is_rejected() {
        assert!(matches!(
            PrRange::new(u64::MAX, 1),
            Err(ReportError::RangeOverflow { .. })
        ));
        assert!(PrRange::new(u64::MAX - 1, 1).is_ok());
    }

    #[test]
    fn test_bounds_all_items_on_first_page() {
        assert_eq!(compute_page_bounds(range(0, 5), 5), bounds(0, 0));
    }

    #[test]
    fn test_bounds_some_items_on_first_page() {
        assert_eq!(compute_page_bounds(range(3, 8), 20), bounds(0, 0));
    }

    #[test]
    fn test_bounds_only_last_item_on_first_page() {
        assert_eq!(compute_page_bounds(range(4, 1), 5), bounds(0, 0));
    }

    #[test]
    fn test_bounds_spans_two_pages() {
        assert_eq!(compute_page_bounds(range(0, 6), 5), bounds(0, 1));
    }

    #[test]
    fn test_bounds_spans_three_pages() {
        let b = compute_page_bounds(range(3, 8), 5);
        assert_eq!(b, bounds(0, 2));
        assert_eq!(b.pages().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_bounds_start_past_first_page() {
        assert_eq!(compute_page_bounds(range(12, 3), 5), bounds(2, 2));
    }

    #[test]
    fn test_bounds_past_last_addressable_page() {
        let last = LAST_ADDRESSABLE_PAGE * 100;
        assert_eq!(
            addressable_page_bounds(range(last, 100), 100).unwrap(),
            bounds(LAST_ADDRESSABLE_PAGE, LAST_ADDRESSABLE_PAGE)
        );
        assert!(matches!(
            addressable_page_bounds(range(last, 101), 100),
            Err(ReportError::PageOutOfRange(page)) if page == LAST_ADDRESSABLE_PAGE + 1
        ));
        assert!(matches!(
            addressable_page_bounds(range(0, u64::MAX), 100),
            Err(ReportError::PageOutOfRange(_))
        ));
    }

    #[test]
    fn test_window_entire_single_page() {
        assert_eq!(compute_page_window(0, range(0, 5), 5), window(0, 5));
    }

    #[test]
    fn test_window_partial_single_page() {
        // Start and end rules both apply to the same page
        assert_eq!(compute_page_window(0, range(3, 8), 20), window(3, 11));
    }

    #[test]
    fn test_window_spans_two_pages() {
        let r = range(3, 3);
        assert_eq!(compute_page_window(0, r, 5), window(3, 5));
        assert_eq!(compute_page_window(1, r, 5), window(0, 1));
    }

    #[test]
    fn test_window_spans_three_pages() {
        let r = range(3, 8);
        assert_eq!(compute_page_window(0, r, 5), window(3, 5));
        assert_eq!(compute_page_window(1, r, 5), window(0, 5));
        assert_eq!(compute_page_window(2, r, 5), window(0, 1));
    }

    #[test]
    fn test_window_end_on_page_boundary() {
        // 5 + 5 = 10 is a multiple of the page size: the last page is consumed
        // up to its end, not closed at position 0
        let r = range(5, 5);
        assert_eq!(compute_page_bounds(r, 5), bounds(1, 1));
        assert_eq!(compute_page_window(1, r, 5), window(0, 5));
    }

    #[test]
    fn test_window_page_size_one() {
        let r = range(2, 3);
        assert_eq!(compute_page_bounds(r, 1), bounds(2, 4));
        for page in 2..=4 {
            assert_eq!(compute_page_window(page, r, 1), window(0, 1));
        }
    }

    #[test]
    fn test_window_contains() {
        let w = window(3, 5);
        assert!(!w.contains(2));
        assert!(w.contains(3));
        assert!(w.contains(4));
        assert!(!w.contains(5));
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn test_windows_cover_exactly_the_requested_positions() {
        for page_size in 1..=7u64 {
            for start in 0..=20u64 {
                for count in 1..=20u64 {
                    let r = range(start, count);
                    let b = compute_page_bounds(r, page_size);
                    assert!(b.start_page <= b.end_page);

                    let mut covered = Vec::new();
                    for page in b.pages() {
                        let w = compute_page_window(page, r, page_size);
                        assert!(w.local_start <= w.local_end);
                        assert!(w.local_end <= page_size);
                        assert!(!w.is_empty(), "page {} contributes nothing", page);
                        covered.extend((w.local_start..w.local_end).map(|i| page * page_size + i));
                    }

                    assert_eq!(
                        covered,
                        r.positions().collect::<Vec<_>>(),
                        "page_size={} start={} count={}",
                        page_size,
                        start,
                        count
                    );
                }
            }
        }
    }
}
