use std::fmt;

use thiserror::Error;

/// Which input collection a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// The first argument of [`merge`](crate::merge).
    First,
    /// The second argument of [`merge`](crate::merge).
    Second,
    /// Collection number `n` (zero-based) of [`merge_all`](crate::merge_all).
    Nth(usize),
}

impl Collection {
    /// Tag for the collection at `index` in a list of collections.
    #[must_use]
    pub fn at(index: usize) -> Self {
        match index {
            0 => Self::First,
            1 => Self::Second,
            n => Self::Nth(n),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First | Self::Nth(0) => f.write_str("first"),
            Self::Second | Self::Nth(1) => f.write_str("second"),
            Self::Nth(n) => write!(f, "#{n}"),
        }
    }
}

/// Error returned when records cannot be merged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// A record has no value for the key field.
    #[error("record {position} of the {collection} collection has no '{field}' field")]
    MissingKey {
        /// Collection holding the offending record.
        collection: Collection,
        /// Zero-based position of the record in that collection.
        position: usize,
        /// Name of the key field that was looked up.
        field: String,
    },
}
