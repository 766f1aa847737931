use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;

use rustc_hash::FxBuildHasher;

use crate::error::{ProbeMapError, Result};
use crate::iter::{EqualRange, IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use crate::probe::{LinearProbing, ProbeSequence};
use crate::slot::Slot;

const DEFAULT_CAPACITY: usize = 16;
const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Entry API for the ProbeMap, similar to std::collections::HashMap.
///
/// Only available when duplicates are disabled: with several entries per
/// key there is no single slot for "the" entry of a key.
pub enum MapEntry<'a, K, V, S = FxBuildHasher, P = LinearProbing> {
    Occupied(OccupiedEntry<'a, K, V, S, P>),
    Vacant(VacantEntry<'a, K, V, S, P>),
}

/// A view into an occupied entry in the map
pub struct OccupiedEntry<'a, K, V, S = FxBuildHasher, P = LinearProbing> {
    map: &'a mut ProbeMap<K, V, S, P, false>,
    slot_idx: usize,
}

/// A view into a vacant entry in the map
pub struct VacantEntry<'a, K, V, S = FxBuildHasher, P = LinearProbing> {
    map: &'a mut ProbeMap<K, V, S, P, false>,
    key: K,
    slot_idx: usize,
}

/// An open addressing hash map over a single contiguous slot array.
///
/// Collisions are resolved by re-probing with the `P: ProbeSequence`
/// strategy until a usable slot turns up. Removal leaves a `Deleted`
/// tombstone in place so probe chains running through the slot stay
/// walkable; tombstones are reused by later insertions and dropped
/// wholesale when the table rebuilds. Growth doubles the capacity
/// whenever an insertion would push the load factor over
/// `max_load_factor`, so probing stays short under the default policy.
///
/// With `ALLOW_DUPLICATES = false` (the default) each key maps to at most
/// one entry and `insert` is a no-op on a present key. The
/// [`ProbeMultiMap`] alias enables duplicates mode, where equal keys can
/// occupy several slots and `count`/`equal_range` expose the
/// multiplicity.
#[derive(Clone)]
pub struct ProbeMap<
    K,
    V,
    S = FxBuildHasher,
    P = LinearProbing,
    const ALLOW_DUPLICATES: bool = false,
> {
    slots: Box<[Slot<K, V>]>,
    size: usize,
    max_load_factor: f64,
    hasher: S,
    probing: P,
}

/// A `ProbeMap` that keeps every inserted entry, equal keys included
pub type ProbeMultiMap<K, V, S = FxBuildHasher, P = LinearProbing> = ProbeMap<K, V, S, P, true>;

/// Where an insertion probe ended up.
enum ProbeSlot {
    /// The key is already stored at this index
    Occupied(usize),
    /// First usable Empty or Deleted slot on the probe path
    Vacant(usize),
    /// No usable slot within a full probe cycle
    Exhausted,
}

fn new_slot_array<K, V>(capacity: usize) -> Box<[Slot<K, V>]> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, Slot::default);
    slots.into_boxed_slice()
}

impl<K, V, S: Default, P: Default, const D: bool> Default for ProbeMap<K, V, S, P, D> {
    fn default() -> Self {
        Self::with_capacity_hasher_and_probe(DEFAULT_CAPACITY, S::default(), P::default())
    }
}

impl<K, V, const D: bool> ProbeMap<K, V, FxBuildHasher, LinearProbing, D> {
    /// Creates a map with the default capacity, hasher and linear probing
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a map with the given number of slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_hasher_and_probe(capacity, FxBuildHasher::default(), LinearProbing)
    }
}

impl<K, V, S, const D: bool> ProbeMap<K, V, S, LinearProbing, D> {
    /// Creates a map with the default capacity and the given hasher
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self::with_capacity_hasher_and_probe(capacity, hasher, LinearProbing)
    }
}

impl<K, V, P, const D: bool> ProbeMap<K, V, FxBuildHasher, P, D> {
    /// Creates a map with the default capacity and the given probe strategy
    pub fn with_probe(probing: P) -> Self {
        Self::with_capacity_and_probe(DEFAULT_CAPACITY, probing)
    }

    pub fn with_capacity_and_probe(capacity: usize, probing: P) -> Self {
        Self::with_capacity_hasher_and_probe(capacity, FxBuildHasher::default(), probing)
    }
}

impl<K, V, S, P, const D: bool> ProbeMap<K, V, S, P, D> {
    /// Creates a map with every knob injected explicitly
    pub fn with_capacity_hasher_and_probe(capacity: usize, hasher: S, probing: P) -> Self {
        Self {
            slots: new_slot_array(capacity),
            size: 0,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hasher,
            probing,
        }
    }

    /// Returns the number of key-value pairs in the map
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map contains no elements
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in the map
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the load factor of the map (size / capacity)
    pub fn load_factor(&self) -> f64 {
        if self.capacity() == 0 {
            return f64::INFINITY;
        }
        self.size as f64 / self.capacity() as f64
    }

    /// Returns the load factor threshold that triggers growth
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    pub fn probing(&self) -> &P {
        &self.probing
    }

    /// Iterates over the entries in slot order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.slots, self.size)
    }

    /// Iterates over the entries with mutable values
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.slots, self.size)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self.iter_mut())
    }

    /// Iterates over every entry stored under `key`.
    ///
    /// In duplicates mode this enumerates each copy; otherwise it yields
    /// at most one pair.
    pub fn equal_range<'a, Q>(&'a self, key: &'a Q) -> EqualRange<'a, K, V, Q>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        EqualRange::new(self.iter(), key)
    }

    /// Drops every entry and resets all slots to Empty, keeping the
    /// capacity
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.clear_to_empty();
        }
        self.size = 0;
    }

    /// Exchanges the entire contents of two maps
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<K, V, S, P, const D: bool> ProbeMap<K, V, S, P, D>
where
    K: Hash + Eq,
    S: BuildHasher,
    P: ProbeSequence,
{
    fn hash_key<Q: Hash + ?Sized>(&self, key: &Q) -> u64 {
        self.hasher.hash_one(key)
    }

    /// Walks the probe chain for `key`. `Some(index)` when an equal key
    /// occupies `index`; `None` once an Empty slot terminates the chain
    /// or the whole cycle is exhausted.
    fn find_index<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.size == 0 {
            return None;
        }
        let capacity = self.capacity();
        let hash = self.hash_key(key);
        for attempt in 0..capacity {
            let index = self.probing.probe(key, hash, attempt, capacity);
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(stored, _) if stored.borrow() == key => return Some(index),
                _ => {}
            }
        }
        None
    }

    /// Selects the slot an insertion of `key` would use: remembers the
    /// first Deleted slot on the chain, stops at the first Empty slot,
    /// and (without duplicates) reports an already-present key. An Empty
    /// terminator with an earlier tombstone on the chain resolves to the
    /// tombstone, reclaiming it.
    fn probe_for_insert(&self, key: &K, hash: u64) -> ProbeSlot {
        let capacity = self.capacity();
        if capacity == 0 {
            return ProbeSlot::Exhausted;
        }
        let mut first_deleted = None;
        for attempt in 0..capacity {
            let index = self.probing.probe(key, hash, attempt, capacity);
            match &self.slots[index] {
                Slot::Empty => return ProbeSlot::Vacant(first_deleted.unwrap_or(index)),
                Slot::Occupied(stored, _) if !D && stored == key => {
                    return ProbeSlot::Occupied(index);
                }
                Slot::Deleted if first_deleted.is_none() => first_deleted = Some(index),
                _ => {}
            }
        }
        match first_deleted {
            Some(index) => ProbeSlot::Vacant(index),
            None => ProbeSlot::Exhausted,
        }
    }

    fn needs_growth(&self) -> bool {
        let capacity = self.capacity();
        if capacity == 0 {
            return true;
        }
        (self.size + 1) as f64 / capacity as f64 > self.max_load_factor
    }

    /// Doubles the capacity (from zero, jumps to the default) until one
    /// more entry fits under the load factor bound, then rebuilds.
    fn grow_if_needed(&mut self) -> Result<()> {
        if !self.needs_growth() {
            return Ok(());
        }
        let mut new_capacity = if self.capacity() == 0 {
            DEFAULT_CAPACITY
        } else {
            self.capacity() * 2
        };
        while (self.size + 1) as f64 / new_capacity as f64 > self.max_load_factor {
            new_capacity *= 2;
        }
        self.rehash_into(new_capacity)
    }

    /// Rebuilds the slot array at `new_capacity`, dropping tombstones.
    ///
    /// Runs in two phases: every live entry's placement is computed
    /// against a scratch occupancy map first, and entries only move once
    /// all of them have a slot. A placement failure therefore leaves the
    /// table unchanged.
    fn rehash_into(&mut self, new_capacity: usize) -> Result<()> {
        let mut placements = Vec::with_capacity(self.size);
        let mut filled = vec![false; new_capacity];
        for slot in self.slots.iter() {
            if let Slot::Occupied(key, _) = slot {
                let hash = self.hash_key(key);
                let placed = (0..new_capacity)
                    .map(|attempt| self.probing.probe(key, hash, attempt, new_capacity))
                    .find(|&index| !filled[index]);
                match placed {
                    Some(index) => {
                        filled[index] = true;
                        placements.push(index);
                    }
                    None => {
                        return Err(ProbeMapError::CapacityExhausted {
                            capacity: new_capacity,
                        })
                    }
                }
            }
        }

        let old = mem::replace(&mut self.slots, new_slot_array(new_capacity));
        let mut placements = placements.into_iter();
        for slot in old.into_vec() {
            if let Slot::Occupied(key, value) = slot {
                let index = placements
                    .next()
                    .expect("placement must exist for occupied entry");
                self.slots[index].write(key, value);
            }
        }
        Ok(())
    }

    /// Inserts a key-value pair, growing the table first if the load
    /// factor bound requires it.
    ///
    /// Returns `Ok(true)` when a new entry went in. Without duplicates an
    /// already-present key is left untouched and reported as `Ok(false)`;
    /// in duplicates mode every insertion adds an entry. Errs only when
    /// no Empty or Deleted slot turns up within a full probe cycle, which
    /// a full-coverage probe strategy never hits under the growth policy.
    pub fn insert(&mut self, key: K, value: V) -> Result<bool> {
        self.grow_if_needed()?;
        let hash = self.hash_key(&key);
        match self.probe_for_insert(&key, hash) {
            ProbeSlot::Occupied(_) => Ok(false),
            ProbeSlot::Vacant(index) => {
                self.slots[index].write(key, value);
                self.size += 1;
                Ok(true)
            }
            ProbeSlot::Exhausted => Err(ProbeMapError::CapacityExhausted {
                capacity: self.capacity(),
            }),
        }
    }

    /// Get a value by key
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index(key)?;
        self.slots[index].value()
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index(key)?;
        self.slots[index].value_mut()
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index(key)?;
        self.slots[index].key_value()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_index(key).is_some()
    }

    /// Returns how many entries are stored under `key`
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if D {
            self.equal_range(key).count()
        } else {
            usize::from(self.contains_key(key))
        }
    }

    /// Checked access: a reference to the value for `key`, or
    /// [`ProbeMapError::KeyNotFound`]
    pub fn at<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(ProbeMapError::KeyNotFound)
    }

    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_mut(key).ok_or(ProbeMapError::KeyNotFound)
    }

    /// Removes one entry for `key` and returns its value.
    ///
    /// The slot becomes a tombstone rather than Empty so probe chains
    /// through it keep working. In duplicates mode one copy is removed
    /// per call.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index(key)?;
        let entry = self.slots[index]
            .mark_deleted()
            .expect("entry must exist for occupied slot");
        self.size -= 1;
        Some(entry)
    }

    /// Sets the growth threshold, rebuilding immediately if the current
    /// load factor already exceeds it.
    ///
    /// Values outside `(0, 1]` are rejected with
    /// [`ProbeMapError::InvalidLoadFactor`] and leave the map unchanged.
    pub fn set_max_load_factor(&mut self, max_load_factor: f64) -> Result<()> {
        if !(max_load_factor > 0.0 && max_load_factor <= 1.0) {
            return Err(ProbeMapError::InvalidLoadFactor(max_load_factor));
        }
        self.max_load_factor = max_load_factor;
        if self.size > 0 && self.size as f64 / self.capacity() as f64 > self.max_load_factor {
            let mut new_capacity = self.capacity() * 2;
            while self.size as f64 / new_capacity as f64 > self.max_load_factor {
                new_capacity *= 2;
            }
            self.rehash_into(new_capacity)?;
        }
        Ok(())
    }

    /// Grows the table to at least `capacity` slots; never shrinks
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity > self.capacity() {
            self.rehash_into(capacity)?;
        }
        Ok(())
    }

    /// Rebuilds at the requested capacity, discarding tombstones.
    ///
    /// The capacity is clamped up to the smallest table that keeps the
    /// current entries under the load factor bound, so `rehash(0)`
    /// compacts the table as far as the bound allows.
    pub fn rehash(&mut self, capacity: usize) -> Result<()> {
        let minimum = (self.size as f64 / self.max_load_factor).ceil() as usize;
        self.rehash_into(capacity.max(minimum))
    }

    fn pair_count(&self, entry: (&K, &V)) -> usize
    where
        V: PartialEq,
    {
        let (key, value) = entry;
        self.iter()
            .filter(|(k, v)| *k == key && *v == value)
            .count()
    }
}

impl<K, V, S, P> ProbeMap<K, V, S, P, false>
where
    K: Hash + Eq,
    S: BuildHasher,
    P: ProbeSequence,
{
    /// Inserts the pair, overwriting the value (never the key identity)
    /// when the key is already present, and returns the replaced value.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Result<Option<V>> {
        self.grow_if_needed()?;
        let hash = self.hash_key(&key);
        match self.probe_for_insert(&key, hash) {
            ProbeSlot::Occupied(index) => Ok(self.slots[index].replace_value(value)),
            ProbeSlot::Vacant(index) => {
                self.slots[index].write(key, value);
                self.size += 1;
                Ok(None)
            }
            ProbeSlot::Exhausted => Err(ProbeMapError::CapacityExhausted {
                capacity: self.capacity(),
            }),
        }
    }

    /// Get an entry for the given key, allowing for efficient
    /// insertion/access patterns.
    ///
    /// Grows the table up front so a vacant entry can insert without
    /// further probing; the error mirrors [`ProbeMap::insert`]'s
    /// exhaustion case.
    pub fn entry(&mut self, key: K) -> Result<MapEntry<'_, K, V, S, P>> {
        self.grow_if_needed()?;
        let hash = self.hash_key(&key);
        match self.probe_for_insert(&key, hash) {
            ProbeSlot::Occupied(slot_idx) => Ok(MapEntry::Occupied(OccupiedEntry {
                map: self,
                slot_idx,
            })),
            ProbeSlot::Vacant(slot_idx) => Ok(MapEntry::Vacant(VacantEntry {
                map: self,
                key,
                slot_idx,
            })),
            ProbeSlot::Exhausted => Err(ProbeMapError::CapacityExhausted {
                capacity: self.capacity(),
            }),
        }
    }
}

impl<'a, K, V, S, P> OccupiedEntry<'a, K, V, S, P> {
    pub fn key(&self) -> &K {
        self.map.slots[self.slot_idx]
            .key()
            .expect("key must exist for occupied entry")
    }

    /// Get a reference to the value in the entry
    pub fn get(&self) -> &V {
        self.map.slots[self.slot_idx]
            .value()
            .expect("value must exist for occupied entry")
    }

    pub fn get_mut(&mut self) -> &mut V {
        self.map.slots[self.slot_idx]
            .value_mut()
            .expect("value must exist for occupied entry")
    }

    /// Converts the entry into a mutable reference tied to the map
    pub fn into_mut(self) -> &'a mut V {
        let map = self.map;
        map.slots[self.slot_idx]
            .value_mut()
            .expect("value must exist for occupied entry")
    }

    /// Insert a new value into the entry, returning the old value
    pub fn insert(&mut self, value: V) -> V {
        self.map.slots[self.slot_idx]
            .replace_value(value)
            .expect("value must exist for occupied entry")
    }

    /// Removes the entry, leaving a tombstone, and returns the value
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    pub fn remove_entry(self) -> (K, V) {
        let map = self.map;
        let entry = map.slots[self.slot_idx]
            .mark_deleted()
            .expect("entry must exist for occupied slot");
        map.size -= 1;
        entry
    }
}

impl<'a, K, V, S, P> VacantEntry<'a, K, V, S, P> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_key(self) -> K {
        self.key
    }

    /// Insert the value into the vacant entry, returning a mutable
    /// reference to it
    pub fn insert(self, value: V) -> &'a mut V {
        let map = self.map;
        map.slots[self.slot_idx].write(self.key, value);
        map.size += 1;
        map.slots[self.slot_idx]
            .value_mut()
            .expect("value was just inserted")
    }
}

impl<'a, K, V, S, P> MapEntry<'a, K, V, S, P> {
    pub fn key(&self) -> &K {
        match self {
            MapEntry::Occupied(entry) => entry.key(),
            MapEntry::Vacant(entry) => entry.key(),
        }
    }

    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            MapEntry::Occupied(entry) => entry.into_mut(),
            MapEntry::Vacant(entry) => entry.insert(default),
        }
    }

    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            MapEntry::Occupied(entry) => entry.into_mut(),
            MapEntry::Vacant(entry) => entry.insert(default()),
        }
    }

    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }

    pub fn and_modify<F: FnOnce(&mut V)>(mut self, f: F) -> Self {
        if let MapEntry::Occupied(entry) = &mut self {
            f(entry.get_mut());
        }
        self
    }
}

/// Layout-independent equality: same live entries regardless of
/// capacity, slot order, or tombstones. Duplicates mode compares the
/// entries as a multiset.
impl<K, V, S, P, const D: bool> PartialEq for ProbeMap<K, V, S, P, D>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    P: ProbeSequence,
{
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        if D {
            self.iter()
                .all(|pair| self.pair_count(pair) == other.pair_count(pair))
        } else {
            self.iter()
                .all(|(key, value)| other.get(key) == Some(value))
        }
    }
}

impl<K, V, S, P, const D: bool> Eq for ProbeMap<K, V, S, P, D>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
    P: ProbeSequence,
{
}

impl<K: fmt::Debug, V: fmt::Debug, S, P, const D: bool> fmt::Debug for ProbeMap<K, V, S, P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// # Panics
/// Panics when an insertion exhausts a probe cycle, which only a
/// non-covering probe strategy can cause.
impl<K, V, S, P, const D: bool> Extend<(K, V)> for ProbeMap<K, V, S, P, D>
where
    K: Hash + Eq,
    S: BuildHasher,
    P: ProbeSequence,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value)
                .expect("no free slot within a probe cycle");
        }
    }
}

/// Collects entries with `insert` semantics: without duplicates the
/// first value for a repeated key wins.
impl<K, V, S, P, const D: bool> FromIterator<(K, V)> for ProbeMap<K, V, S, P, D>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    P: ProbeSequence + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ProbeMap<K, V, FxBuildHasher, LinearProbing, false>
where
    K: Hash + Eq,
{
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_iter(entries)
    }
}

impl<K, V, S, P, const D: bool> IntoIterator for ProbeMap<K, V, S, P, D> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter::new(self.slots, self.size)
    }
}

impl<'a, K, V, S, P, const D: bool> IntoIterator for &'a ProbeMap<K, V, S, P, D> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, S, P, const D: bool> IntoIterator for &'a mut ProbeMap<K, V, S, P, D> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}
