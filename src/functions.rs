use crate::container::Container;
use crate::pair::Pair;

/// Returns its argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a new pair with the values of `pair` interchanged.
///
/// The input is only borrowed, so it is still usable afterwards.
pub fn swap_pair<T: Clone, U: Clone>(pair: &Pair<T, U>) -> Pair<U, T> {
    pair.clone().swap()
}

/// Combines the values of two containers into a pair.
pub fn merge_containers<T: Clone, U: Clone>(
    first: &Container<T>,
    second: &Container<U>,
) -> Pair<T, U> {
    Pair::new(first.get().clone(), second.get().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identity_string() {
        assert_eq!(identity("test"), "test");
    }

    #[test]
    fn test_identity_int() {
        assert_eq!(identity(123), 123);
    }

    #[test]
    fn test_swap_pair() {
        let original = Pair::new("first", "second");
        let swapped = swap_pair(&original);

        assert_eq!(*swapped.first(), "second");
        assert_eq!(*swapped.second(), "first");
        assert_eq!(*original.first(), "first");
    }

    #[test]
    fn test_swap_pair_mixed_types() {
        let original = Pair::new("hello".to_string(), 42);
        let swapped: Pair<i32, String> = swap_pair(&original);
        assert_eq!(swapped, Pair::new(42, "hello".to_string()));
    }

    #[test]
    fn test_merge_containers() {
        let name = Container::new("test");
        let answer = Container::new(42);
        let merged = merge_containers(&name, &answer);

        assert_eq!(merged, Pair::new("test", 42));
        assert_eq!(*name.get(), "test");
        assert_eq!(*answer.get(), 42);
    }

    proptest! {
        #[test]
        fn prop_identity(value: String) {
            prop_assert_eq!(identity(value.clone()), value);
        }

        #[test]
        fn prop_double_swap_restores(a: i64, b: String) {
            let pair = Pair::new(a, b);
            prop_assert_eq!(swap_pair(&swap_pair(&pair)), pair);
        }
    }
}
