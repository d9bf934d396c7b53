//! Error types for rangesync core.

use thiserror::Error;

use crate::item::Item;

/// Errors that can occur while building or querying a storage vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("already sealed")]
    AlreadySealed,

    #[error("not sealed")]
    NotSealed,

    #[error("bad id size: expected {expected} bytes, got {actual}")]
    BadIdSize { expected: usize, actual: usize },

    #[error("duplicate item inserted: {0}")]
    DuplicateItem(Item),

    #[error("index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("bad range: [{begin}, {end}) over size {size}")]
    BadRange {
        begin: usize,
        end: usize,
        size: usize,
    },
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
