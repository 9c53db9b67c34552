//! Sliding window of page numbers to render as navigation buttons.

/// Number of page buttons shown when the caller does not choose.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Returns the run of page numbers around `current_page`.
///
/// All pages are returned when they fit. Otherwise the window is centred on
/// `current_page` and shifted back when it would run past `total_pages`, so it always
/// holds exactly `max_visible` entries and contains the current page. A `current_page` past
/// the end is treated as the last page.
pub fn page_numbers(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if max_visible == 0 {
        return Vec::new();
    }
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }

    let current_page = current_page.clamp(1, total_pages);
    let half = max_visible / 2;
    let mut start = current_page.saturating_sub(half).max(1);
    let end = (start + max_visible - 1).min(total_pages);

    if end + 1 - start < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    (start..=end).collect()
}
