//! Record contract consumed by the engine.
//!
//! The engine never inspects record fields itself: it asks each record for its id
//! and whether it satisfies a single `(key, value)` filter.

use std::fmt::Debug;

/// An item that can be paginated and filtered.
pub trait Record {
    /// Stable, unique identifier.
    type Id: PartialEq + Debug;
    /// Filter slot, e.g. "type" or "status". One value per key is active at a time.
    type FilterKey: Ord + Clone + Debug;
    /// Selected value for a filter slot.
    type FilterValue: Clone + PartialEq + Debug;

    fn id(&self) -> &Self::Id;

    /// Equality test of this record against one active filter.
    fn matches(&self, key: &Self::FilterKey, value: &Self::FilterValue) -> bool;
}
