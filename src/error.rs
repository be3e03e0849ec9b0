use thiserror::Error;

use crate::hash_table::MAXIMUM_CAPACITY;

/// Errors returned by the fallible [`HashTable`] constructors.
///
/// Lookups and removals never fail: a missing key is reported as `None`.
///
/// [`HashTable`]: crate::HashTable
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// The requested bucket count is larger than [`MAXIMUM_CAPACITY`].
    #[error("requested capacity {requested} exceeds the maximum of {maximum} buckets")]
    ExceedsMaximum {
        /// The capacity that was asked for.
        requested: usize,
        /// The largest capacity a table can reach.
        maximum: usize,
    },
}

impl CapacityError {
    pub(crate) fn exceeds_maximum(requested: usize) -> Self {
        CapacityError::ExceedsMaximum {
            requested,
            maximum: MAXIMUM_CAPACITY,
        }
    }
}
