use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

use tracing::debug;

use super::{
    Chain, DuplicateKeyError, IntoKeys, IntoValues, Iter, KeyNotFoundError, Keys, Values,
    ValuesMut, ZeroCapacityError,
};
use crate::collections::KeyValuePair;
use crate::collections::hash::{BucketArray, HashProvider, StdHash};
use crate::collections::linked::{SlotList, SlotPosition};
use crate::collections::traits::{Comparator, NaturalOrder};
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// A map of keys to values using separate chaining, where every chain lives in one shared
/// [`SlotList`].
///
/// The number of buckets is chosen at construction and never changes; the map doesn't rehash.
/// Each bucket records the [`SlotPosition`] of its first slot and how many slots follow it. A new
/// key is linked in directly before its bucket's current head, so a bucket's slots stay
/// contiguous in the list and a chain reads most-recently-added first. Slot storage, unlike the
/// buckets, grows on demand or through [`reserve`](HashMap::reserve).
///
/// Hashing goes through the `H` [`HashProvider`] and key equality through the `C`
/// [`Comparator`]. Neither is cached: the bucket of a key is recomputed on every access, so it is
/// a logic error for a key to be manipulated in a way that changes its hash or equality while in
/// the map. Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashMap.
/// - `b`: The number of entries in the bucket of the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(b)`* |
/// | `get` | `O(b)` |
/// | `set_value` | `O(b)` |
/// | `remove` | `O(b)` |
/// | `contains_key` | `O(b)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `get_keys` | `O(n)` |
///
/// \* If the slot list has no spare capacity, `add` will also take `O(n)` to grow it.
///
/// \** If the HashMap already has capacity for the requested number of entries, `reserve` is
/// `O(1)`.
pub struct HashMap<K, V, H = StdHash, C = NaturalOrder> {
    pub(crate) buckets: BucketArray,
    pub(crate) slots: SlotList<KeyValuePair<K, V>>,
    pub(crate) hasher: H,
    pub(crate) comparator: C,
}

impl<K, V, H: HashProvider<K> + Default, C: Comparator<K> + Default> HashMap<K, V, H, C> {
    /// Creates a new HashMap with `bucket_count` buckets and room for `slots_per_bucket` entries
    /// in each of them before the slot storage has to grow. The default hash provider and
    /// comparator are used.
    ///
    /// # Panics
    /// Panics if either argument is 0, or if the total slot capacity overflows.
    pub fn new(bucket_count: usize, slots_per_bucket: usize) -> HashMap<K, V, H, C> {
        Self::try_new(bucket_count, slots_per_bucket).throw()
    }

    /// Creates a new HashMap like [`HashMap::new`], returning an [`Err`] rather than panicking if
    /// either argument is 0.
    pub fn try_new(
        bucket_count: usize,
        slots_per_bucket: usize,
    ) -> Result<HashMap<K, V, H, C>, ZeroCapacityError> {
        Self::try_with_providers(bucket_count, slots_per_bucket, H::default(), C::default())
    }
}

impl<K, V, H: HashProvider<K>, C: Comparator<K>> HashMap<K, V, H, C> {
    /// Creates a new HashMap with `bucket_count` buckets, room for `slots_per_bucket` entries in
    /// each of them, and the provided `hasher` and `comparator`.
    ///
    /// # Panics
    /// Panics if either count is 0, or if the total slot capacity overflows.
    pub fn with_providers(
        bucket_count: usize,
        slots_per_bucket: usize,
        hasher: H,
        comparator: C,
    ) -> HashMap<K, V, H, C> {
        Self::try_with_providers(bucket_count, slots_per_bucket, hasher, comparator).throw()
    }

    /// Creates a new HashMap like [`HashMap::with_providers`], returning an [`Err`] rather than
    /// panicking if either count is 0.
    ///
    /// # Panics
    /// Panics if the total slot capacity overflows.
    pub fn try_with_providers(
        bucket_count: usize,
        slots_per_bucket: usize,
        hasher: H,
        comparator: C,
    ) -> Result<HashMap<K, V, H, C>, ZeroCapacityError> {
        if bucket_count == 0 || slots_per_bucket == 0 {
            return Err(ZeroCapacityError);
        }

        let slot_cap = bucket_count
            .checked_mul(slots_per_bucket)
            .ok_or(CapacityOverflow)
            .throw();
        debug!(bucket_count, slot_cap, "allocating HashMap");

        Ok(HashMap {
            buckets: BucketArray::new(bucket_count),
            slots: SlotList::with_cap(slot_cap),
            hasher,
            comparator,
        })
    }

    /// Adds the provided `key`-`value` pair to the HashMap and returns the position of its slot.
    ///
    /// # Panics
    /// Panics if the key already exists in the HashMap.
    pub fn add(&mut self, key: K, value: V) -> SlotPosition {
        self.try_add(key, value).throw()
    }

    /// Adds the provided `key`-`value` pair to the HashMap and returns the position of its slot,
    /// or an [`Err`] if the key already exists. The map is unchanged on failure.
    pub fn try_add(&mut self, key: K, value: V) -> Result<SlotPosition, DuplicateKeyError> {
        let index = self.bucket_index(&key);
        if self.find(index, &key).is_some() {
            return Err(DuplicateKeyError);
        }

        Ok(self.link(index, KeyValuePair::new(key, value)))
    }

    /// Removes the entry at `position`, returning it as a key-value pair, or None if the position
    /// is vacant.
    pub fn remove_at(&mut self, position: SlotPosition) -> Option<(K, V)> {
        let index = self.bucket_index(&self.slots.get(position)?.key);
        Some(self.unlink(index, position))
    }

    /// Increases the slot capacity of the HashMap so that it can hold `total` entries without its
    /// slot storage growing. The bucket count is never changed. Does nothing if the capacity is
    /// already sufficient.
    pub fn reserve(&mut self, total: usize) {
        if total <= self.capacity() { return; }

        self.slots.reserve(total - self.len());
    }
}

impl<K, V, H, C> HashMap<K, V, H, C> {
    /// Returns the number of entries in the HashMap.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the HashMap contains no entries.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of buckets, which is fixed for the lifetime of the HashMap.
    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries the HashMap can hold before its slot storage grows.
    pub fn capacity(&self) -> usize {
        self.slots.cap()
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where hashing and comparison carry over the borrow.
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        let position = self.find(self.bucket_index(key), key)?;
        self.slots.get(position).map(|pair| &pair.value)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        let position = self.find(self.bucket_index(key), key)?;
        self.slots.get_mut(position).map(|pair| &mut pair.value)
    }

    /// Returns a reference to the value associated with the provided `key`, panicking on a
    /// failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if the map contains no value for `key`.
    pub fn get_value<Q>(&self, key: &Q) -> &V
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        self.try_get_value(key).throw()
    }

    /// Returns a reference to the value associated with the provided `key`, returning an [`Err`]
    /// on a failure rather than panicking.
    pub fn try_get_value<Q>(&self, key: &Q) -> Result<&V, KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        self.get(key).ok_or(KeyNotFoundError)
    }

    /// Returns a mutable reference to the value associated with the provided `key`, panicking on
    /// a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if the map contains no value for `key`.
    pub fn get_value_mut<Q>(&mut self, key: &Q) -> &mut V
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        self.try_get_value_mut(key).throw()
    }

    /// Returns a mutable reference to the value associated with the provided `key`, returning an
    /// [`Err`] on a failure rather than panicking.
    pub fn try_get_value_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        self.get_mut(key).ok_or(KeyNotFoundError)
    }

    /// Replaces the value associated with `key`, returning the previous value.
    ///
    /// # Panics
    /// Panics if the map contains no value for `key`.
    pub fn set_value<Q>(&mut self, key: &Q, value: V) -> V
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        self.try_set_value(key, value).throw()
    }

    /// Replaces the value associated with `key`, returning the previous value, or an [`Err`] if
    /// the map contains no value for `key`.
    pub fn try_set_value<Q>(&mut self, key: &Q, value: V) -> Result<V, KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        Ok(mem::replace(self.try_get_value_mut(key)?, value))
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        self.find(self.bucket_index(key), key).is_some()
    }

    /// Returns the position of the slot holding `key`, if the map contains it.
    pub fn position_of<Q>(&self, key: &Q) -> Option<SlotPosition>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        self.find(self.bucket_index(key), key)
    }

    /// Removes the entry associated with `key`, returning its value.
    ///
    /// # Panics
    /// Panics if the map contains no value for `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        self.try_remove(key).throw()
    }

    /// Removes the entry associated with `key`, returning its value, or an [`Err`] if the map
    /// contains no value for `key`. The map is unchanged on failure.
    pub fn try_remove<Q>(&mut self, key: &Q) -> Result<V, KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        self.try_remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry associated with `key`, returning the key and value, or an [`Err`] if the
    /// map contains no value for `key`.
    pub fn try_remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V), KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: HashProvider<Q>,
        C: Comparator<Q>,
    {
        let index = self.bucket_index(key);
        let position = self.find(index, key).ok_or(KeyNotFoundError)?;
        Ok(self.unlink(index, position))
    }

    /// Returns the entry at `position`, or None if the position is vacant. Positions of removed
    /// entries are detected as vacant, even if their storage has since been reused.
    pub fn entry_at(&self, position: SlotPosition) -> Option<(&K, &V)> {
        self.slots.get(position).map(KeyValuePair::as_tuple)
    }

    /// Returns true if `position` still refers to an entry in this map.
    pub fn is_occupied(&self, position: SlotPosition) -> bool {
        self.slots.contains(position)
    }

    /// Removes every entry, keeping the bucket count and slot capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.buckets.clear();
    }

    /// Returns a newly allocated slice containing a copy of every key, in iteration order. The
    /// slice is empty if the map is.
    pub fn get_keys(&self) -> Box<[K]>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    /// Returns true if both maps contain the same keys, with values that are equal according to
    /// `values`. Iteration order is irrelevant.
    pub fn equals_by<VC>(&self, other: &Self, values: &VC) -> bool
    where
        H: HashProvider<K>,
        C: Comparator<K>,
        VC: Comparator<V>,
    {
        self.len() == other.len()
            && self.iter().all(|(key, value)| {
                other.get(key).is_some_and(|other_value| values.equals(value, other_value))
            })
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.slots.iter_mut())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Copy, V: Copy, H: Clone, C: Clone> HashMap<K, V, H, C> {
    /// Duplicates the map's storage as-is, rather than re-adding every entry like
    /// [`Clone::clone`]. The copy has exactly the same layout, so positions from `self` are valid
    /// in the copy as well.
    pub fn bulk_copy(&self) -> HashMap<K, V, H, C> {
        HashMap {
            buckets: self.buckets.clone(),
            slots: self.slots.clone(),
            hasher: self.hasher.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<K, V, H, C> HashMap<K, V, H, C> {
    /// Calculates the bucket for the provided `key`.
    pub(crate) fn bucket_index<Q: ?Sized>(&self, key: &Q) -> usize
    where
        H: HashProvider<Q>,
    {
        let index = self.hasher.bucket_index(key, self.bucket_count());
        debug_assert!(index < self.bucket_count(), "HashProvider returned an out of range bucket");
        index
    }

    /// Scans the chain of bucket `index` for `key`, returning the position of its slot.
    pub(crate) fn find<Q: ?Sized>(&self, index: usize, key: &Q) -> Option<SlotPosition>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
    {
        self.chain(index)
            .find(|(_, pair)| self.comparator.equals(pair.key.borrow(), key))
            .map(|(position, _)| position)
    }

    /// Returns an iterator over the slots of bucket `index`, from its head.
    pub(crate) fn chain(&self, index: usize) -> Chain<'_, K, V> {
        let bucket = &self.buckets[index];
        Chain {
            slots: &self.slots,
            next: bucket.head(),
            remaining: bucket.len(),
        }
    }

    /// Links `pair` into bucket `index`, directly before the bucket's current head. The key must
    /// not already be present.
    pub(crate) fn link(&mut self, index: usize, pair: KeyValuePair<K, V>) -> SlotPosition {
        let bucket = &mut self.buckets[index];

        // Placing the new slot before the head keeps the chain contiguous without touching the
        // positions of any other bucket.
        let position = match bucket.head() {
            None => self.slots.add(pair),
            Some(head) => self.slots.insert(pair, head),
        };

        bucket.push_head(position);
        position
    }

    /// Unlinks the slot at `position` from bucket `index` and the slot list.
    pub(crate) fn unlink(&mut self, index: usize, position: SlotPosition) -> (K, V) {
        let (pair, next) = self.slots.remove(position);
        self.buckets[index].unlink(position, next);
        pair.into_tuple()
    }
}

impl<K, V, H, C, Q> Index<&Q> for HashMap<K, V, H, C>
where
    K: Borrow<Q>,
    Q: ?Sized,
    H: HashProvider<Q>,
    C: Comparator<Q>,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get_value(key)
    }
}

impl<K, V, H, C, Q> IndexMut<&Q> for HashMap<K, V, H, C>
where
    K: Borrow<Q>,
    Q: ?Sized,
    H: HashProvider<Q>,
    C: Comparator<Q>,
{
    fn index_mut(&mut self, key: &Q) -> &mut Self::Output {
        self.get_value_mut(key)
    }
}

impl<K, V, H: HashProvider<K>, C: Comparator<K>> Extend<(K, V)> for HashMap<K, V, H, C> {
    /// Adds every pair from `iter`.
    ///
    /// # Panics
    /// Panics if any key already exists in the HashMap.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, V, H, C> Clone for HashMap<K, V, H, C>
where
    K: Clone,
    V: Clone,
    H: HashProvider<K> + Clone,
    C: Comparator<K> + Clone,
{
    /// Creates a deep copy by re-adding every entry of `self` to a new map with the same bucket
    /// count and capacity. The logical content is the same, but chains in the copy are in
    /// reverse order relative to `self`. See [`HashMap::bulk_copy`] for a layout-preserving
    /// copy.
    fn clone(&self) -> Self {
        let mut map = HashMap {
            buckets: BucketArray::new(self.bucket_count()),
            slots: SlotList::with_cap(self.capacity()),
            hasher: self.hasher.clone(),
            comparator: self.comparator.clone(),
        };

        for (key, value) in self.iter() {
            let index = map.bucket_index(key);
            // Keys are already unique in self, so there's no need to scan.
            map.link(index, KeyValuePair::new(key.clone(), value.clone()));
        }

        map
    }
}

impl<K, V: PartialEq, H: HashProvider<K>, C: Comparator<K>> PartialEq for HashMap<K, V, H, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key).is_some_and(|other| value == other))
    }
}

impl<K, V: Eq, H: HashProvider<K>, C: Comparator<K>> Eq for HashMap<K, V, H, C> {}

impl<K: Debug, V: Debug, H: Debug, C: Debug> Debug for HashMap<K, V, H, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = (0..self.bucket_count())
            .map(|index| DebugRaw(match self.buckets[index].head() {
                None => "-".into(),
                Some(_) => format!(
                    "[{}]",
                    self.chain(index)
                        .map(|(_, pair)| format!("{:?}: {:?}", pair.key, pair.value))
                        .collect::<Box<[_]>>()
                        .join(", ")
                ),
            }))
            .collect::<Box<[_]>>();

        f.debug_struct("HashMap")
            .field("buckets", &buckets)
            .field("len", &self.len())
            .field("cap", &self.capacity())
            .field("hasher", &self.hasher)
            .field("comparator", &self.comparator)
            .finish()
    }
}

impl<K: Debug, V: Debug, H, C> Display for HashMap<K, V, H, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}

#[allow(unused)]
impl<K, V, H, C> HashMap<K, V, H, C> {
    /// Checks that the buckets exactly partition the slot list, for use in tests.
    pub(crate) fn verify_buckets(&self)
    where
        H: HashProvider<K>,
    {
        self.slots.verify_double_links();

        let mut total = 0;
        for index in 0..self.bucket_count() {
            let bucket = &self.buckets[index];
            assert_eq!(bucket.is_empty(), bucket.head().is_none());
            for (position, pair) in self.chain(index) {
                assert!(self.slots.contains(position));
                assert_eq!(self.bucket_index(&pair.key), index, "slot chained into wrong bucket");
                total += 1;
            }
        }
        assert_eq!(total, self.len(), "buckets don't cover every slot");
    }
}
