//! Insertion strategies for [`SortedList`](crate::SortedList).
//!
//! A strategy is a zero-sized marker chosen through the list's second type
//! parameter. Every strategy leaves the items in non-decreasing order; they
//! differ only in cost per insertion.

/// How a new item is placed into an already sorted vector.
pub trait InsertStrategy {
    /// Inserts `item` into `items`, which must already be sorted.
    /// On return `items` is sorted again.
    fn insert<T: Ord>(items: &mut Vec<T>, item: T);
}

/// Binary search for the insertion point, then a single shift.
///
/// O(log n) comparisons plus an O(n) move. Equal items keep the order in
/// which they were added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BinaryInsert;

/// Append, then sort the whole vector again.
///
/// O(n log n) per call. The sort is stable, but tie order is not part of the
/// list's contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ResortOnAdd;

impl InsertStrategy for BinaryInsert {
    fn insert<T: Ord>(items: &mut Vec<T>, item: T) {
        // upper bound, so the new item lands after its equals
        let index = items.partition_point(|existing| existing <= &item);
        items.insert(index, item);
    }
}

impl InsertStrategy for ResortOnAdd {
    fn insert<T: Ord>(items: &mut Vec<T>, item: T) {
        items.push(item);
        items.sort();
    }
}
