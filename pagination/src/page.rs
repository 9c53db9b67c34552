//! Page slicing and page-count metadata.

use std::fmt;

use serde::Serialize;

/// `ceil(total_items / items_per_page)`; 0 when there are no items.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Slices one page out of an already-filtered sequence.
///
/// Returns `(page_slice, total_items, total_pages)`. The window is
/// `[(current_page - 1) * items_per_page, current_page * items_per_page)` truncated to
/// `total_items`. No clamping happens here: a page past the end yields an empty slice
/// and the caller decides whether to move back into range.
pub fn paginate<T>(
    filtered: &[T],
    current_page: usize,
    items_per_page: usize,
) -> (&[T], usize, usize) {
    let total_items = filtered.len();
    let pages = total_pages(total_items, items_per_page);

    if current_page == 0 || items_per_page == 0 {
        return (&filtered[..0], total_items, pages);
    }

    let start = (current_page - 1)
        .saturating_mul(items_per_page)
        .min(total_items);
    let end = current_page.saturating_mul(items_per_page).min(total_items);

    (&filtered[start..end], total_items, pages)
}

/// Snapshot of the pagination state, as rendered next to a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    /// 1-indexed position of the first visible item, 0 when nothing is visible.
    pub start_item: usize,
    /// 1-indexed position of the last visible item, 0 when nothing is visible.
    pub end_item: usize,
}

impl PageInfo {
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        let total_pages = total_pages(total_items, items_per_page);
        let first = current_page
            .saturating_sub(1)
            .saturating_mul(items_per_page)
            .saturating_add(1);
        let visible = current_page > 0 && items_per_page > 0 && first <= total_items;
        let (start_item, end_item) = if visible {
            (first, current_page.saturating_mul(items_per_page).min(total_items))
        } else {
            (0, 0)
        };

        Self {
            current_page,
            items_per_page,
            total_items,
            total_pages,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
            start_item,
            end_item,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} items",
            self.start_item, self.end_item, self.total_items
        )
    }
}

/// A borrowed page of records plus its metadata.
#[derive(Debug, Clone)]
pub struct Page<'a, T> {
    pub items: Vec<&'a T>,
    pub info: PageInfo,
}

impl<T> Page<'_, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
