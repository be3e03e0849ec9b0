#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;

/// A hash table using separate chaining over power-of-two buckets.
///
/// This module provides the `HashTable` container along with its iterators
/// and the sizing constants that govern growth.
pub mod hash_table;

/// Immutable point-in-time copies of a table's keys or entries.
pub mod snapshot;

pub use error::CapacityError;
#[cfg(any(test, feature = "stats"))]
pub use hash_table::DebugStats;
pub use hash_table::DEFAULT_INITIAL_CAPACITY;
pub use hash_table::DefaultHashBuilder;
pub use hash_table::HashTable;
pub use hash_table::LOAD_FACTOR;
pub use hash_table::MAXIMUM_CAPACITY;
pub use snapshot::EntrySet;
pub use snapshot::KeySet;
pub use snapshot::Snapshot;
