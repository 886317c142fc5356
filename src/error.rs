use thiserror::Error;

/// Errors produced by the container types.
///
/// Only operations that need at least one element can fail; everything else
/// is infallible by construction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    #[error("cannot {operation} from an empty {collection}")]
    EmptyCollection {
        collection: &'static str,
        operation: &'static str,
    },
}

impl ContainerError {
    pub(crate) fn empty(collection: &'static str, operation: &'static str) -> Self {
        tracing::trace!(collection, operation, "operation on empty collection");
        ContainerError::EmptyCollection {
            collection,
            operation,
        }
    }

    /// Returns true for [`ContainerError::EmptyCollection`].
    pub fn is_empty_collection(&self) -> bool {
        matches!(self, ContainerError::EmptyCollection { .. })
    }
}

pub type Result<T> = std::result::Result<T, ContainerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = ContainerError::empty("stack", "pop");
        assert_eq!(err.to_string(), "cannot pop from an empty stack");
    }

    #[test]
    fn test_error_matches_variant() {
        let err = ContainerError::empty("sorted list", "take the minimum");
        assert!(err.is_empty_collection());
        match err {
            ContainerError::EmptyCollection {
                collection,
                operation,
            } => {
                assert_eq!(collection, "sorted list");
                assert_eq!(operation, "take the minimum");
            }
        }
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ContainerError::empty("stack", "peek"));
    }
}
