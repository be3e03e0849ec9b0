use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

/// An immutable, point-in-time copy of some of a table's contents.
///
/// Snapshots own their items. Mutating the table they came from afterwards has
/// no effect on them, and they expose no way to mutate the items themselves.
/// Items are in bucket order, which is unspecified and changes across resizes,
/// so equality between snapshots ignores order.
///
/// # Examples
///
/// ```rust
/// # use chain_hash::HashTable;
/// #
/// let mut table: HashTable<&str, i32> = HashTable::new();
/// table.put("a", 1);
/// table.put("b", 2);
///
/// let keys = table.key_set();
/// table.remove(&"a");
///
/// assert_eq!(keys.len(), 2);
/// assert!(keys.contains(&Some("a")));
/// assert!(keys.contains(&Some("b")));
/// ```
#[derive(Clone)]
pub struct Snapshot<T> {
    items: Box<[T]>,
}

/// A snapshot of every key in a table. The absent key appears as `None`.
pub type KeySet<K> = Snapshot<Option<K>>;

/// A snapshot of every key-value association in a table.
pub type EntrySet<K, V> = Snapshot<(Option<K>, V)>;

impl<T> Snapshot<T> {
    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }

    /// Returns the number of items captured.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the table was empty when the snapshot was taken.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the captured items.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns `true` if `item` was captured.
    ///
    /// This is a linear scan; snapshots are not indexed.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.iter().any(|i| i == item)
    }
}

impl<T: Debug> Debug for Snapshot<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Snapshot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Eq> Eq for Snapshot<T> {}

impl<'a, T> IntoIterator for &'a Snapshot<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Snapshot<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_vec().into_iter()
    }
}
