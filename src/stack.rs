use std::iter::{FromIterator, Rev};

use serde::{Deserialize, Serialize};

use crate::error::{ContainerError, Result};

/// A growable LIFO stack.
///
/// The end of the backing vector is the top of the stack, so `push`, `pop`
/// and `peek` are all O(1) (amortized for `push`). Serializes bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Result<T> {
        self.items
            .pop()
            .ok_or_else(|| ContainerError::empty("stack", "pop"))
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or_else(|| ContainerError::empty("stack", "peek"))
    }

    pub fn peek_mut(&mut self) -> Result<&mut T> {
        self.items
            .last_mut()
            .ok_or_else(|| ContainerError::empty("stack", "peek"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the top of the stack down to the bottom.
    pub fn iter(&self) -> Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owning iterator that yields elements in pop order.
#[derive(Debug)]
pub struct IntoIter<T> {
    stack: Stack<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.items.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.stack.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Rev<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
