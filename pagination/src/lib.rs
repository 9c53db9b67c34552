//! # pagination
//!
//! Client-side filtering and pagination over a collection that was fetched in full.
//!
//! ## Modules
//!
//! - [`record`] – [`Record`] trait: id + per-filter equality test
//! - [`filter`] – [`FilterSet`] and the stable [`apply_filters`] pass
//! - [`page`] – [`paginate`], [`total_pages`], [`PageInfo`], [`Page`]
//! - [`window`] – sliding window of page numbers
//! - [`engine`] – [`PaginationFilterEngine`], the stateful cursor
//!
//! ```rust
//! use pagination::{paginate, page_numbers};
//!
//! let items: Vec<u32> = (0..23).collect();
//! let (page, total_items, total_pages) = paginate(&items, 3, 10);
//! assert_eq!(page, &[20, 21, 22]);
//! assert_eq!((total_items, total_pages), (23, 3));
//!
//! assert_eq!(page_numbers(7, 12, 5), vec![5, 6, 7, 8, 9]);
//! ```

pub mod engine;
pub mod filter;
pub mod page;
pub mod record;
pub mod window;


pub use engine::{
    PaginationFilterEngine, PaginationOptions, DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE_SIZES,
};
pub use filter::{apply_filters, FilterSet};
pub use page::{paginate, total_pages, Page, PageInfo};
pub use record::Record;
pub use window::{page_numbers, DEFAULT_MAX_VISIBLE};
