use std::iter::FromIterator;
use std::marker::PhantomData;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ContainerError, Result};
use crate::order::{BinaryInsert, InsertStrategy};

/// A list that keeps its items in non-decreasing order after every operation.
///
/// The element type must be [`Ord`]; the insertion strategy `S` is a
/// zero-sized marker (see [`crate::order`]) and defaults to
/// [`BinaryInsert`].
///
/// ```
/// use generic_containers::SortedList;
///
/// let mut list = SortedList::new();
/// for n in [5, 2, 8, 1] {
///     list.add(n);
/// }
/// assert_eq!(list.to_vec(), vec![1, 2, 5, 8]);
/// assert_eq!(list.min(), Ok(&1));
/// assert_eq!(list.max(), Ok(&8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortedList<T, S = BinaryInsert> {
    items: Vec<T>,
    _strategy: PhantomData<S>,
}

impl<T: Ord> SortedList<T> {
    pub fn new() -> Self {
        Self::with_strategy(BinaryInsert)
    }
}

impl<T: Ord, S: InsertStrategy> SortedList<T, S> {
    /// Creates an empty list that inserts with the given strategy.
    pub fn with_strategy(_strategy: S) -> Self {
        SortedList {
            items: Vec::new(),
            _strategy: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SortedList {
            items: Vec::with_capacity(capacity),
            _strategy: PhantomData,
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Builds a list from arbitrary items with a single sort.
    pub fn from_vec(mut items: Vec<T>) -> Self {
        sort_if_needed(&mut items);
        SortedList {
            items,
            _strategy: PhantomData,
        }
    }

    pub fn add(&mut self, item: T) {
        S::insert(&mut self.items, item);
    }

    /// Returns an independent copy of the items in sorted order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn min(&self) -> Result<&T> {
        self.items
            .first()
            .ok_or_else(|| ContainerError::empty("sorted list", "read the minimum"))
    }

    pub fn max(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or_else(|| ContainerError::empty("sorted list", "read the maximum"))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Removes one item equal to `item`, if present.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.items.binary_search(item).ok()?;
        Some(self.items.remove(index))
    }

    /// Merges two lists in linear time.
    pub fn merge(self, other: Self) -> Self {
        SortedList {
            items: itertools::merge(self.items, other.items).collect(),
            _strategy: PhantomData,
        }
    }
}

/// Sorts `items` unless they are already in order. Returns whether a sort ran.
fn sort_if_needed<T: Ord>(items: &mut [T]) -> bool {
    let sorted = items.iter().tuple_windows().all(|(a, b)| a <= b);
    if !sorted {
        items.sort();
    }
    !sorted
}

impl<T, S> Default for SortedList<T, S> {
    fn default() -> Self {
        SortedList {
            items: Vec::new(),
            _strategy: PhantomData,
        }
    }
}

impl<T, S> IntoIterator for SortedList<T, S> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a SortedList<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Ord, S: InsertStrategy> FromIterator<T> for SortedList<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord, S: InsertStrategy> Extend<T> for SortedList<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
        sort_if_needed(&mut self.items);
    }
}

impl<T: Serialize, S> Serialize for SortedList<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.items.serialize(serializer)
    }
}

impl<'de, T, S> Deserialize<'de> for SortedList<T, S>
where
    T: Ord + Deserialize<'de>,
    S: InsertStrategy,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut items = Vec::<T>::deserialize(deserializer)?;
        if sort_if_needed(&mut items) {
            tracing::debug!(len = items.len(), "sorted out-of-order sorted list input");
        }
        Ok(SortedList {
            items,
            _strategy: PhantomData,
        })
    }
}
