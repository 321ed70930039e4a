use std::mem;

use thiserror::Error;
use tracing::debug;

use crate::table::hashing::{horner_hash, ProbeSequence};

/// Load factor above which an insertion triggers [`ProbingHashTable::grow`].
pub const MAX_LOAD_FACTOR: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Invalid capacity: {0} (must be positive)")]
    InvalidCapacity(usize),
}

/// A stored key/value pair. The key never changes once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V> {
    key: String,
    value: V,
}

impl<V> Entry<V> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

enum Probe {
    Found(usize),
    Vacant(usize),
    Exhausted,
}

enum Placement<V> {
    Inserted,
    Replaced(V),
}

/// Open-addressing hash table keyed by strings.
///
/// Collisions are resolved with quadratic probing from a Horner's-rule home
/// slot (see [`horner_hash`]). After every insertion of a new key the load
/// factor is at most [`MAX_LOAD_FACTOR`]; crossing it rebuilds the table at
/// `2 * capacity + 1` slots.
///
/// There is no removal. Probe chains are never broken, which is what lets
/// lookups stop at the first empty slot. Adding deletion would require
/// tombstones.
///
/// Single-owner and single-threaded: callers sharing a table across threads
/// must synchronise externally.
#[derive(Debug, Clone)]
pub struct ProbingHashTable<V> {
    slots: Vec<Option<Entry<V>>>,
    capacity: usize,
    count: usize,
}

impl<V> ProbingHashTable<V> {
    pub fn new(initial_capacity: usize) -> Result<Self, TableError> {
        if initial_capacity == 0 {
            return Err(TableError::InvalidCapacity(initial_capacity));
        }

        Ok(Self::empty(initial_capacity))
    }

    fn empty(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Self {
            slots,
            capacity,
            count: 0,
        }
    }

    /// Home slot of `key` at the current capacity.
    pub fn hash(&self, key: &str) -> usize {
        horner_hash(key, self.capacity)
    }

    /// Slots visited when looking up `key`, in order.
    pub fn probe_sequence(&self, key: &str) -> ProbeSequence {
        ProbeSequence::for_key(key, self.capacity)
    }

    /// Insert `key`, or replace its value if already present.
    ///
    /// Returns the replaced value. Replacing never changes `len()` and never
    /// grows the table.
    ///
    /// # Panics
    ///
    /// Panics if the probe sequence is exhausted without finding the key or
    /// an empty slot, here or while growing. The load-factor cap does not rule
    /// this out: on a composite capacity `i*i` reaches only some offsets, so
    /// enough keys sharing a home slot can use up every reachable slot.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let entry = Entry {
            key: key.into(),
            value,
        };

        match self.place(entry) {
            Placement::Replaced(previous) => Some(previous),
            Placement::Inserted => {
                if self.exceeds_max_load() {
                    self.grow();
                }
                None
            }
        }
    }

    /// Rebuild at `2 * capacity + 1` slots, rehashing every entry.
    ///
    /// Every entry's new slot is planned before anything moves. If some key
    /// cannot reach a free slot at the new capacity the call panics and the
    /// table is left exactly as it was.
    ///
    /// # Panics
    ///
    /// Panics on saturation of the rebuilt table (see [`Self::insert`]).
    pub fn grow(&mut self) {
        let old_capacity = self.capacity;
        let new_capacity = 2 * old_capacity + 1;

        // Keys are unique, so each entry takes the first free slot on its path.
        let mut taken = vec![false; new_capacity];
        let mut moves = Vec::with_capacity(self.count);
        for (old_index, entry) in self.occupied() {
            let target = ProbeSequence::for_key(&entry.key, new_capacity)
                .find(|&index| !taken[index])
                .unwrap_or_else(|| saturated(&entry.key, new_capacity, moves.len()));
            taken[target] = true;
            moves.push((old_index, target));
        }

        let mut rebuilt = Self::empty(new_capacity);
        for (old_index, target) in moves {
            rebuilt.slots[target] = self.slots[old_index].take();
            rebuilt.count += 1;
        }
        debug_assert_eq!(rebuilt.count, self.count);
        debug_assert!(!rebuilt.exceeds_max_load());

        *self = rebuilt;

        debug!(
            old_capacity,
            new_capacity = self.capacity,
            entries = self.count,
            "Grew probing hash table"
        );
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slot_index_of(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.slot_index_of(key)
            .and_then(|index| self.slots[index].as_ref())
            .map(|entry| &entry.value)
    }

    /// Mutable access to a stored value. The key itself stays fixed.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.slot_index_of(key)?;
        self.slots[index].as_mut().map(|entry| &mut entry.value)
    }

    /// Physical slot currently holding `key`.
    ///
    /// Only meaningful until the next growth.
    pub fn slot_index_of(&self, key: &str) -> Option<usize> {
        match self.probe(key) {
            Probe::Found(index) => Some(index),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    /// Entry stored at physical slot `index`, if any.
    pub fn slot(&self, index: usize) -> Option<&Entry<V>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Every key, in physical slot order (neither insertion nor sorted order).
    pub fn all_keys(&self) -> Vec<&str> {
        self.keys().collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Key/value pairs in physical slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|entry| (entry.key.as_str(), &entry.value)))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity as f64
    }

    fn occupied(&self) -> impl Iterator<Item = (usize, &Entry<V>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|entry| (index, entry)))
    }

    fn exceeds_max_load(&self) -> bool {
        // count / capacity > 0.5, without floating point
        self.count * 2 > self.capacity
    }

    fn probe(&self, key: &str) -> Probe {
        for index in self.probe_sequence(key) {
            match &self.slots[index] {
                None => return Probe::Vacant(index),
                Some(entry) if entry.key == key => return Probe::Found(index),
                Some(_) => {}
            }
        }
        Probe::Exhausted
    }

    fn place(&mut self, entry: Entry<V>) -> Placement<V> {
        match self.probe(&entry.key) {
            Probe::Found(index) => match self.slots[index].as_mut() {
                Some(slot) => Placement::Replaced(mem::replace(&mut slot.value, entry.value)),
                None => unreachable!("probe reported an occupied slot that is empty"),
            },
            Probe::Vacant(index) => {
                self.slots[index] = Some(entry);
                self.count += 1;
                Placement::Inserted
            }
            Probe::Exhausted => saturated(&entry.key, self.capacity, self.count),
        }
    }
}

#[cold]
fn saturated(key: &str, capacity: usize, count: usize) -> ! {
    panic!(
        "probing hash table saturated: probe sequence for {key:?} reaches no free slot \
         (capacity {capacity}, {count} entries placed); quadratic probing does not \
         cover every slot of a composite capacity"
    )
}
