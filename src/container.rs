use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A generic holder for exactly one value.
///
/// The value is owned by the container and can be read with [`get`](Self::get)
/// or replaced wholesale with [`set`](Self::set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Container<T> {
    value: T,
}

impl<T> Container<T> {
    pub fn new(value: T) -> Self {
        Container { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Stores `value` and hands back the previous one.
    pub fn replace(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn map<V, F>(self, f: F) -> Container<V>
    where
        F: FnOnce(T) -> V,
    {
        Container::new(f(self.value))
    }
}

impl<T> From<T> for Container<T> {
    fn from(value: T) -> Self {
        Container::new(value)
    }
}

impl<T: Display> Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Container({})", self.value)
    }
}
