use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Two independently typed values.
///
/// A pair has no setters. The only transformation is [`swap`](Self::swap),
/// which produces a new `Pair<U, T>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pair<T, U> {
    first: T,
    second: U,
}

impl<T, U> Pair<T, U> {
    pub fn new(first: T, second: U) -> Self {
        Pair { first, second }
    }

    pub fn first(&self) -> &T {
        &self.first
    }

    pub fn second(&self) -> &U {
        &self.second
    }

    /// Consumes the pair and returns one with the values interchanged.
    ///
    /// Swapping twice gives back the original pair.
    pub fn swap(self) -> Pair<U, T> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }

    pub fn into_parts(self) -> (T, U) {
        (self.first, self.second)
    }

    pub fn as_refs(&self) -> Pair<&T, &U> {
        Pair {
            first: &self.first,
            second: &self.second,
        }
    }

    pub fn map_first<V, F>(self, f: F) -> Pair<V, U>
    where
        F: FnOnce(T) -> V,
    {
        Pair::new(f(self.first), self.second)
    }

    pub fn map_second<V, F>(self, f: F) -> Pair<T, V>
    where
        F: FnOnce(U) -> V,
    {
        Pair::new(self.first, f(self.second))
    }
}

impl<T, U> From<(T, U)> for Pair<T, U> {
    fn from((first, second): (T, U)) -> Self {
        Pair::new(first, second)
    }
}

impl<T, U> From<Pair<T, U>> for (T, U) {
    fn from(pair: Pair<T, U>) -> Self {
        pair.into_parts()
    }
}

impl<T: Display, U: Display> Display for Pair<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_creation() {
        let pair = Pair::new("key", 123);
        assert_eq!(*pair.first(), "key");
        assert_eq!(*pair.second(), 123);
    }

    #[test]
    fn test_pair_swap() {
        let swapped = Pair::new("first", "second").swap();
        assert_eq!(*swapped.first(), "second");
        assert_eq!(*swapped.second(), "first");
    }

    #[test]
    fn test_swap_changes_types() {
        let pair: Pair<i32, String> = Pair::new(42, "forty-two".to_string());
        let swapped: Pair<String, i32> = pair.clone().swap();
        assert_eq!(swapped.first(), "forty-two");
        assert_eq!(*swapped.second(), 42);
        assert_eq!(swapped.swap(), pair);
    }

    #[test]
    fn test_tuple_conversions() {
        let pair: Pair<&str, f64> = ("half", 0.5).into();
        assert_eq!(*pair.first(), "half");

        let (name, value): (&str, f64) = pair.into();
        assert_eq!(name, "half");
        assert_eq!(value, 0.5);
    }

    #[test]
    fn test_map_and_as_refs() {
        let pair = Pair::new(2, "two".to_string());
        let refs = pair.as_refs();
        assert_eq!(**refs.first(), 2);
        assert_eq!(refs.second().len(), 3);

        let mapped = pair.map_first(|n| n * 10).map_second(|s| s.len());
        assert_eq!(mapped, Pair::new(20, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Pair::new(42, "forty-two").to_string(), "(42, forty-two)");
    }

    #[test]
    fn test_serde_round_trip() {
        let pair = Pair::new("key".to_string(), 7u8);
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"first":"key","second":7}"#);

        let back: Pair<String, u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }
}
