//! Stateful pagination + filtering over an in-memory collection.
//!
//! [`PaginationFilterEngine`] owns the authoritative records, the active filters and the
//! page cursor. Every mutation goes through a named operation; views (page slice, page
//! info, page window) are derived on demand and never mutate records.

use std::borrow::Borrow;

use tracing::debug;

use crate::filter::{matching_indices, FilterSet};
use crate::page::{paginate, total_pages, Page, PageInfo};
use crate::record::Record;
use crate::window::page_numbers;

/// Page sizes offered to the user.
pub const DEFAULT_PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];

/// Page size used until the user picks another one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Initial state for a new engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationOptions {
    pub initial_page: usize,
    pub initial_items_per_page: usize,
    /// Allowed values for `change_items_per_page`.
    pub page_sizes: Vec<usize>,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            initial_page: 1,
            initial_items_per_page: DEFAULT_ITEMS_PER_PAGE,
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
        }
    }
}

/// Filters and paginates a collection of `T`.
///
/// Invariants after every operation:
/// - `1 <= current_page <= max(total_pages, 1)`
/// - changing the page size or any filter puts the cursor back on page 1
/// - `total_items` counts the records matching every active filter
#[derive(Debug, Clone)]
pub struct PaginationFilterEngine<T: Record> {
    records: Vec<T>,
    filters: FilterSet<T::FilterKey, T::FilterValue>,
    /// Indices into `records` that pass `filters`, in record order.
    filtered: Vec<usize>,
    current_page: usize,
    items_per_page: usize,
    page_sizes: Vec<usize>,
}

impl<T: Record> Default for PaginationFilterEngine<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Record> PaginationFilterEngine<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self::with_options(records, PaginationOptions::default())
    }

    /// Builds an engine with custom initial state.
    ///
    /// An empty size list falls back to [`DEFAULT_PAGE_SIZES`]; an initial page size outside
    /// the allowed list falls back to the first allowed size.
    pub fn with_options(records: Vec<T>, options: PaginationOptions) -> Self {
        let page_sizes: Vec<usize> = if options.page_sizes.iter().any(|&s| s > 0) {
            options.page_sizes.into_iter().filter(|&s| s > 0).collect()
        } else {
            DEFAULT_PAGE_SIZES.to_vec()
        };
        let items_per_page = if page_sizes.contains(&options.initial_items_per_page) {
            options.initial_items_per_page
        } else {
            page_sizes[0]
        };

        let filters = FilterSet::new();
        let filtered = matching_indices(&records, &filters);
        let mut engine = Self {
            records,
            filters,
            filtered,
            current_page: options.initial_page,
            items_per_page,
            page_sizes,
        };
        engine.clamp_current_page();
        engine
    }

    /// Replaces the collection, e.g. after a re-fetch.
    ///
    /// Filters and page size are kept. The cursor is clamped into the new page range so a
    /// shrinking collection never leaves the user on a page that no longer exists.
    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.refilter();
        let before = self.current_page;
        self.clamp_current_page();
        if before != self.current_page {
            debug!(
                from = before,
                to = self.current_page,
                total_pages = self.total_pages(),
                "current page clamped after records changed"
            );
        }
    }

    /// Moves to `page` when `1 <= page <= total_pages`; otherwise leaves the cursor alone.
    /// Returns the resulting current page.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
        } else {
            debug!(
                page,
                total_pages = self.total_pages(),
                "page request out of range, ignored"
            );
        }
        self.current_page
    }

    pub fn go_to_first_page(&mut self) -> usize {
        self.go_to_page(1)
    }

    pub fn go_to_last_page(&mut self) -> usize {
        self.go_to_page(self.total_pages())
    }

    pub fn go_to_next_page(&mut self) -> usize {
        self.go_to_page(self.current_page + 1)
    }

    pub fn go_to_previous_page(&mut self) -> usize {
        // page 0 is rejected by go_to_page
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Switches page size and returns to page 1. Sizes outside the allowed list are rejected.
    pub fn change_items_per_page(&mut self, new_size: usize) -> bool {
        if !self.page_sizes.contains(&new_size) {
            debug!(new_size, allowed = ?self.page_sizes, "page size not allowed, ignored");
            return false;
        }
        self.items_per_page = new_size;
        self.current_page = 1;
        true
    }

    /// Sets (`Some`) or clears (`None`) one filter and returns to page 1.
    pub fn change_filter(&mut self, key: T::FilterKey, value: Option<T::FilterValue>) {
        debug!(?key, ?value, "filter changed");
        self.filters.apply(key, value);
        self.refilter();
        self.current_page = 1;
    }

    /// Drops every filter and returns to page 1.
    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
        self.refilter();
        self.current_page = 1;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    pub fn filters(&self) -> &FilterSet<T::FilterKey, T::FilterValue> {
        &self.filters
    }

    /// The full, unfiltered collection.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn total_items(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items(), self.items_per_page)
    }

    /// Records passing every active filter, in original order.
    pub fn filtered(&self) -> Vec<&T> {
        self.filtered.iter().map(|&index| &self.records[index]).collect()
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.current_page, self.items_per_page, self.total_items())
    }

    /// The visible slice of the filtered records.
    pub fn page(&self) -> Page<'_, T> {
        let (indices, _, _) = paginate(&self.filtered, self.current_page, self.items_per_page);
        Page {
            items: indices.iter().map(|&index| &self.records[index]).collect(),
            info: self.page_info(),
        }
    }

    /// Page numbers to render around the current page.
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        page_numbers(self.current_page, self.total_pages(), max_visible)
    }

    /// Looks a record up by id in the full collection, regardless of filters.
    pub fn find<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.records
            .iter()
            .find(|record| <T::Id as Borrow<Q>>::borrow(record.id()) == id)
    }

    fn refilter(&mut self) {
        self.filtered = matching_indices(&self.records, &self.filters);
    }

    fn clamp_current_page(&mut self) {
        let last = self.total_pages().max(1);
        self.current_page = self.current_page.clamp(1, last);
    }
}
