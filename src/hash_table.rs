use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use log::debug;
use log::trace;
use log::warn;

use crate::error::CapacityError;
use crate::snapshot::EntrySet;
use crate::snapshot::KeySet;
use crate::snapshot::Snapshot;

/// Number of buckets allocated on the first insertion when no capacity was
/// requested.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Largest number of buckets a table will grow to.
///
/// Once a table reaches this size its threshold is pinned to `usize::MAX` and
/// further insertions only lengthen the collision chains.
pub const MAXIMUM_CAPACITY: usize = 1 << 30;

/// Ratio of entries to buckets above which the table doubles.
pub const LOAD_FACTOR: f32 = 0.75;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hash builder used when none is specified.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hash builder used when none is specified.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        compile_error!("either the `foldhash` or the `std` feature must be enabled");
    }
}

/// `floor(capacity * LOAD_FACTOR)`, kept in integers.
#[inline(always)]
fn threshold_for(capacity: usize) -> usize {
    ((capacity as u128 * 3) / 4) as usize
}

/// Folds the upper half of a 32-bit hash code into the lower half.
///
/// Bucket indices only look at the low bits, so without this small tables
/// would ignore most of the hash.
#[inline(always)]
fn spread(code: u32) -> u32 {
    code ^ (code >> 16)
}

#[inline(always)]
fn bucket_index(hash: u32, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    hash as usize & (capacity - 1)
}

/// Bucket count after the next growth step, or `None` when the table is
/// already saturated.
#[inline(always)]
fn next_capacity(current: usize, initial: usize) -> Option<usize> {
    match current {
        0 => Some(initial),
        c if c >= MAXIMUM_CAPACITY => None,
        c => Some(c * 2),
    }
}

/// Rounds a requested capacity to the bucket count actually allocated.
#[inline(always)]
fn initial_buckets(requested: usize) -> usize {
    requested.clamp(1, MAXIMUM_CAPACITY).next_power_of_two()
}

#[derive(Clone)]
struct Entry<K, V> {
    key: Option<K>,
    value: V,
    hash: u32,
    next: Option<usize>,
}

/// Debug statistics for chain length analysis.
///
/// Available with the `stats` feature and inside unit tests.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of entries currently in the table
    pub populated: usize,
    /// Number of buckets
    pub capacity: usize,
    /// Entry count above which the next resize happens
    pub threshold: usize,
    /// Buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest collision chain
    pub longest_chain: usize,
    /// populated / capacity
    pub load_factor: f64,
    /// occupied_buckets / capacity
    pub bucket_utilization: f64,
    /// Number of times the table has doubled
    pub resizes: usize,
    /// Arena slots waiting to be reused
    pub free_slots: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor, threshold {})",
            self.populated,
            self.capacity,
            self.load_factor * 100.0,
            self.threshold
        );
        println!(
            "Buckets: {}/{} occupied ({:.2}% utilization)",
            self.occupied_buckets,
            self.capacity,
            self.bucket_utilization * 100.0
        );
        println!("Longest chain: {}", self.longest_chain);
        println!("Resizes: {}", self.resizes);
        println!("Free arena slots: {}", self.free_slots);
    }
}

/// A hash table resolving collisions by chaining.
///
/// Buckets are a power-of-two array; each holds the head of a singly linked
/// chain of entries whose spread hash maps to it. The chains live in an arena
/// and are linked by index, so unlinking an entry never moves another one.
///
/// The bucket array is allocated on the first insertion. Whenever the number
/// of entries exceeds `capacity * 0.75` the array doubles and every entry is
/// re-inserted, until [`MAXIMUM_CAPACITY`] is reached.
///
/// Keys may be absent: every key argument accepts either a key or `None`, and
/// the absent key is stored like any other under hash 0.
///
/// The table is not synchronized. Wrap it in a lock if it must be shared.
///
/// # Examples
///
/// ```rust
/// # use chain_hash::HashTable;
/// #
/// let mut table: HashTable<&str, i32> = HashTable::new();
/// assert_eq!(table.put("x", 1), None);
/// assert_eq!(table.put("y", 2), None);
/// assert_eq!(table.put("x", 3), Some(1));
///
/// assert_eq!(table.get(&"x"), Some(&3));
/// assert_eq!(table.size(), 2);
///
/// assert_eq!(table.remove(&"y"), Some(2));
/// assert_eq!(table.get(&"y"), None);
///
/// table.put(None, 7);
/// assert_eq!(table.get(None), Some(&7));
/// ```
#[derive(Clone)]
pub struct HashTable<K, V, S = DefaultHashBuilder> {
    buckets: Vec<Option<usize>>,
    slots: Vec<Option<Entry<K, V>>>,
    free: Vec<usize>,

    size: usize,
    threshold: usize,
    initial_capacity: usize,
    resizes: usize,

    hash_builder: S,
}

impl<K, V, S> Debug for HashTable<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Creates an empty table that will use `hash_builder` to hash keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// # use foldhash::fast::FixedState;
    /// #
    /// let mut table: HashTable<u32, &str, _> = HashTable::with_hasher(FixedState::with_seed(7));
    /// table.put(1, "one");
    /// assert_eq!(table.get(&1), Some(&"one"));
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::from_parts(DEFAULT_INITIAL_CAPACITY, hash_builder)
    }

    /// Creates an empty table whose first allocation holds at least
    /// `capacity` buckets.
    ///
    /// The request is rounded up to a power of two and clamped to
    /// [`MAXIMUM_CAPACITY`]. Nothing is allocated until the first insertion.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::from_parts(initial_buckets(capacity), hash_builder)
    }

    /// Like [`with_capacity_and_hasher`](Self::with_capacity_and_hasher), but
    /// refuses requests above [`MAXIMUM_CAPACITY`] instead of clamping them.
    pub fn try_with_capacity_and_hasher(
        capacity: usize,
        hash_builder: S,
    ) -> Result<Self, CapacityError> {
        if capacity > MAXIMUM_CAPACITY {
            return Err(CapacityError::exceeds_maximum(capacity));
        }
        Ok(Self::with_capacity_and_hasher(capacity, hash_builder))
    }

    fn from_parts(initial_capacity: usize, hash_builder: S) -> Self {
        Self {
            buckets: Vec::new(),
            slots: Vec::new(),
            free: Vec::new(),
            size: 0,
            threshold: 0,
            initial_capacity,
            resizes: 0,
            hash_builder,
        }
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of distinct keys in the table. Same as [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets, or 0 before the first insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// #
    /// let mut table: HashTable<u64, u64> = HashTable::new();
    /// assert_eq!(table.capacity(), 0);
    /// table.put(1, 1);
    /// assert_eq!(table.capacity(), 16);
    /// ```
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the entry count above which the table grows.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns a reference to the table's hash builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes every entry. The bucket array keeps its size.
    pub fn clear(&mut self) {
        self.buckets.fill(None);
        self.slots.clear();
        self.free.clear();
        self.size = 0;
    }

    /// Iterates over all entries in bucket order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: &self.buckets,
            slots: &self.slots,
            bucket: 0,
            cursor: None,
            remaining: self.size,
        }
    }

    /// Iterates over all keys in bucket order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterates over all values in bucket order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Copies every key into an immutable [`KeySet`].
    ///
    /// The snapshot is unaffected by later changes to the table.
    pub fn key_set(&self) -> KeySet<K>
    where
        K: Clone,
    {
        Snapshot::from_vec(self.keys().map(|k| k.cloned()).collect())
    }

    /// Copies every key-value pair into an immutable [`EntrySet`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// #
    /// let mut table: HashTable<&str, i32> = HashTable::new();
    /// table.put("a", 1);
    /// let entries = table.entry_set();
    /// table.put("a", 2);
    /// assert!(entries.contains(&(Some("a"), 1)));
    /// ```
    pub fn entry_set(&self) -> EntrySet<K, V>
    where
        K: Clone,
        V: Clone,
    {
        Snapshot::from_vec(
            self.iter()
                .map(|(k, v)| (k.cloned(), v.clone()))
                .collect(),
        )
    }

    fn entry(&self, index: usize) -> &Entry<K, V> {
        match &self.slots[index] {
            Some(entry) => entry,
            None => unreachable!("chain links to vacant slot {index}"),
        }
    }

    fn entry_mut(&mut self, index: usize) -> &mut Entry<K, V> {
        match &mut self.slots[index] {
            Some(entry) => entry,
            None => unreachable!("chain links to vacant slot {index}"),
        }
    }

    fn allocate(&mut self, entry: Entry<K, V>) -> usize {
        match self.free.pop() {
            Some(index) => {
                debug_assert!(self.slots[index].is_none());
                self.slots[index] = Some(entry);
                index
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) -> Entry<K, V> {
        let Some(entry) = self.slots[index].take() else {
            unreachable!("released vacant slot {index}");
        };
        self.free.push(index);
        entry
    }

    #[cfg(any(test, feature = "stats"))]
    fn chain_len(&self, head: Option<usize>) -> usize {
        let mut len = 0;
        let mut cursor = head;
        while let Some(index) = cursor {
            len += 1;
            cursor = self.entry(index).next;
        }
        len
    }

    /// Counts buckets by chain length: index `i` is the number of buckets
    /// whose chain holds exactly `i` entries.
    ///
    /// Available with the `stats` feature and inside unit tests.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> Vec<usize> {
        let mut hist = vec![0usize; 1];
        for head in self.buckets.iter().copied() {
            let len = self.chain_len(head);
            if hist.len() <= len {
                hist.resize(len + 1, 0);
            }
            hist[len] += 1;
        }
        hist
    }

    /// Returns bucket and chain statistics for debugging.
    ///
    /// Available with the `stats` feature and inside unit tests.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let capacity = self.capacity();
        let mut occupied_buckets = 0;
        let mut longest_chain = 0;
        for head in self.buckets.iter().copied() {
            let len = self.chain_len(head);
            if len > 0 {
                occupied_buckets += 1;
            }
            longest_chain = longest_chain.max(len);
        }

        DebugStats {
            populated: self.size,
            capacity,
            threshold: self.threshold,
            occupied_buckets,
            longest_chain,
            load_factor: if capacity == 0 {
                0.0
            } else {
                self.size as f64 / capacity as f64
            },
            bucket_utilization: if capacity == 0 {
                0.0
            } else {
                occupied_buckets as f64 / capacity as f64
            },
            resizes: self.resizes,
            free_slots: self.free.len(),
        }
    }

    /// Pretty-prints the chain-length histogram as a horizontal bar chart.
    #[cfg(all(feature = "stats", feature = "std"))]
    pub fn print_chain_histogram(&self) {
        let hist = self.chain_histogram();
        let max = hist.iter().copied().max().unwrap_or(0);
        if self.capacity() == 0 || max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        println!(
            "chain histogram ({} entries, {} buckets):",
            self.size,
            self.capacity()
        );
        for (len, &count) in hist.iter().enumerate() {
            let width = (count * max_bar).div_ceil(max);
            println!("{:>3} | {} ({})", len, "█".repeat(width), count);
        }
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn hash_key(&self, key: Option<&K>) -> u32 {
        match key {
            None => 0,
            Some(key) => spread(self.hash_builder.hash_one(key) as u32),
        }
    }

    fn find_index(&self, hash: u32, key: Option<&K>) -> Option<usize> {
        if self.buckets.is_empty() {
            return None;
        }

        let mut cursor = self.buckets[bucket_index(hash, self.buckets.len())];
        while let Some(index) = cursor {
            let entry = self.entry(index);
            if entry.hash == hash && entry.key.as_ref() == key {
                return Some(index);
            }
            cursor = entry.next;
        }
        None
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// An existing entry keeps its key and position; only the value changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// #
    /// let mut table: HashTable<u32, &str> = HashTable::new();
    /// assert_eq!(table.put(37, "a"), None);
    /// assert_eq!(table.put(37, "b"), Some("a"));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn put(&mut self, key: impl Into<Option<K>>, value: V) -> Option<V> {
        let key = key.into();
        let hash = self.hash_key(key.as_ref());
        self.insert_hashed(hash, key, value)
    }

    /// Shared by `put` and rehashing. Appends new entries at the chain tail.
    fn insert_hashed(&mut self, hash: u32, key: Option<K>, value: V) -> Option<V> {
        if self.buckets.is_empty() {
            self.resize();
        }

        let index = bucket_index(hash, self.buckets.len());
        let mut cursor = self.buckets[index];
        let mut tail = None;
        while let Some(slot) = cursor {
            let entry = self.entry_mut(slot);
            if entry.hash == hash && entry.key == key {
                return Some(core::mem::replace(&mut entry.value, value));
            }
            tail = Some(slot);
            cursor = entry.next;
        }

        let slot = self.allocate(Entry {
            key,
            value,
            hash,
            next: None,
        });
        match tail {
            None => self.buckets[index] = Some(slot),
            Some(tail) => self.entry_mut(tail).next = Some(slot),
        }

        self.size += 1;
        if self.size > self.threshold {
            self.resize();
        }
        None
    }

    /// Allocates the bucket array or doubles it, then re-inserts every entry.
    ///
    /// The threshold is raised before any entry is re-inserted, and the
    /// re-inserted count can never exceed it, so rehashing cannot trigger a
    /// nested resize.
    fn resize(&mut self) {
        let old_capacity = self.buckets.len();
        let Some(new_capacity) = next_capacity(old_capacity, self.initial_capacity) else {
            if self.threshold != usize::MAX {
                warn!(
                    "hash table saturated at {} buckets with {} entries",
                    old_capacity, self.size
                );
            }
            self.threshold = usize::MAX;
            return;
        };

        self.threshold = threshold_for(new_capacity);
        let old_buckets = core::mem::replace(&mut self.buckets, vec![None; new_capacity]);
        let mut old_slots = core::mem::replace(&mut self.slots, Vec::with_capacity(self.size));
        self.free.clear();
        let moved = self.size;
        self.size = 0;

        for head in old_buckets {
            let mut cursor = head;
            while let Some(index) = cursor {
                let Some(entry) = old_slots[index].take() else {
                    unreachable!("chain links to vacant slot {index}");
                };
                cursor = entry.next;
                self.insert_hashed(entry.hash, entry.key, entry.value);
            }
        }
        debug_assert_eq!(self.size, moved);

        if old_capacity == 0 {
            trace!(
                "allocated {} buckets (threshold {})",
                new_capacity, self.threshold
            );
        } else {
            self.resizes += 1;
            debug!(
                "resized hash table from {} to {} buckets ({} entries, threshold {})",
                old_capacity, new_capacity, self.size, self.threshold
            );
        }
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// #
    /// let mut table: HashTable<u32, &str> = HashTable::new();
    /// table.put(1, "a");
    /// assert_eq!(table.get(&1), Some(&"a"));
    /// assert_eq!(table.get(&2), None);
    /// assert_eq!(table.get(None), None);
    /// ```
    pub fn get<'k>(&self, key: impl Into<Option<&'k K>>) -> Option<&V>
    where
        K: 'k,
    {
        let key = key.into();
        let hash = self.hash_key(key);
        self.find_index(hash, key).map(|index| &self.entry(index).value)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Option<&mut V>
    where
        K: 'k,
    {
        let key = key.into();
        let hash = self.hash_key(key);
        let index = self.find_index(hash, key)?;
        Some(&mut self.entry_mut(index).value)
    }

    /// Returns `true` if the table holds an entry for `key`.
    pub fn contains_key<'k>(&self, key: impl Into<Option<&'k K>>) -> bool
    where
        K: 'k,
    {
        let key = key.into();
        self.find_index(self.hash_key(key), key).is_some()
    }

    /// Removes `key`, returning its value if it was present.
    ///
    /// Capacity never shrinks.
    pub fn remove<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Option<V>
    where
        K: 'k,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key`, returning the stored key and value if it was present.
    pub fn remove_entry<'k>(
        &mut self,
        key: impl Into<Option<&'k K>>,
    ) -> Option<(Option<K>, V)>
    where
        K: 'k,
    {
        if self.buckets.is_empty() {
            return None;
        }

        let key = key.into();
        let hash = self.hash_key(key);
        let index = bucket_index(hash, self.buckets.len());

        let mut previous = None;
        let mut cursor = self.buckets[index];
        while let Some(slot) = cursor {
            let entry = self.entry(slot);
            let next = entry.next;
            if entry.hash == hash && entry.key.as_ref() == key {
                match previous {
                    None => self.buckets[index] = next,
                    Some(previous) => self.entry_mut(previous).next = next,
                }
                let removed = self.release(slot);
                self.size -= 1;
                return Some((removed.key, removed.value));
            }
            previous = Some(slot);
            cursor = next;
        }
        None
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    S: Default,
{
    /// Creates an empty table with the default hash builder.
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates an empty table whose first allocation holds at least
    /// `capacity` buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// #
    /// let mut table: HashTable<u32, u32> = HashTable::with_capacity(100);
    /// table.put(1, 1);
    /// assert_eq!(table.capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    /// Creates an empty table, failing if `capacity` exceeds
    /// [`MAXIMUM_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::CapacityError;
    /// # use chain_hash::HashTable;
    /// # use chain_hash::MAXIMUM_CAPACITY;
    /// #
    /// let err = HashTable::<u32, u32>::try_with_capacity(MAXIMUM_CAPACITY + 1).unwrap_err();
    /// assert!(matches!(err, CapacityError::ExceedsMaximum { .. }));
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        Self::try_with_capacity_and_hasher(capacity, S::default())
    }
}

impl<K, V, S> Default for HashTable<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> PartialEq for HashTable<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl<K, V, S> Eq for HashTable<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> FromIterator<(K, V)> for HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K, V, S> Extend<(K, V)> for HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashTable<K, V, S> {
    type Item = (Option<&'a K>, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of a `HashTable`, in bucket order.
pub struct Iter<'a, K, V> {
    buckets: &'a [Option<usize>],
    slots: &'a [Option<Entry<K, V>>],
    bucket: usize,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (Option<&'a K>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(index) = self.cursor {
                let slots = self.slots;
                let Some(entry) = &slots[index] else {
                    unreachable!("chain links to vacant slot {index}");
                };
                self.cursor = entry.next;
                self.remaining -= 1;
                return Some((entry.key.as_ref(), &entry.value));
            }

            let head = self.buckets.get(self.bucket)?;
            self.cursor = *head;
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a `HashTable`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = Option<&'a K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An iterator over the values of a `HashTable`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
