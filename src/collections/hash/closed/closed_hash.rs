use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};
use std::iter;
use std::mem;

use tracing::{debug, trace};

use super::Iter;
use crate::collections::hash::{
    DEFAULT_CAP, DictionaryError, DuplicateKey, KeyNotFound, MIN_CAP, RollingState, TableFull,
};
use crate::collections::traits::{Dictionary, EmptyCollection};
use crate::util::fmt::{DebugRaw, write_entries};
use crate::util::result::ResultExtension;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;

pub(crate) type Slot<K, E> = Option<(K, E)>;

/// A [`Dictionary`] that stores its entries directly in a table of slots, resolving collisions by
/// linear probing.
///
/// Each key has a home slot, `hash(key) % cap`. An entry is stored in the first vacant slot at or
/// after its home slot, wrapping around at the end of the table. Before an insertion, if the table
/// is at least 3/4 full, it doubles in size and every entry is placed again.
///
/// Lookups probe forward from the home slot until they find the key or reach a vacant slot.
/// Removal leaves no tombstone: every following entry of the same run whose home slot doesn't lie
/// between the vacated slot and its current slot is shifted back into the gap. This keeps every
/// entry reachable from its home slot without crossing a vacant slot.
///
/// It is a logic error for a key to be manipulated in a way that changes its hash while it is in
/// the dictionary.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the dictionary.
/// - `c`: The capacity of the table.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get/update` | `O(1)`*, `O(c)` |
/// | `contains_key` | `O(1)`*, `O(c)` |
/// | `insert` | `O(1)`*, `O(n)`** |
/// | `remove` | `O(1)`*, `O(c)` |
/// | `clear` | `O(c)` |
///
/// \* Probing only visits the run of occupied slots starting at the home slot, which stays short
/// below the load factor. A table with long runs of colliding keys degrades towards `O(c)`.
///
/// \** If the table needs to grow, each entry is placed again in `O(n)`.
///
/// # Examples
/// ```
/// # use positional_collections::collections::hash::ClosedHashDictionary;
/// # use positional_collections::collections::traits::Dictionary;
/// let mut dict = ClosedHashDictionary::new();
/// dict.insert(1, "One").unwrap();
/// dict.insert(2, "Two").unwrap();
/// assert_eq!(dict.get(&1), Ok(&"One"));
/// assert!(dict.insert(1, "Uno").is_err());
/// assert_eq!(dict.cap(), 20);
/// ```
pub struct ClosedHashDictionary<K, E, B = RollingState> {
    pub(crate) slots: Box<[Slot<K, E>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<K: Hash + Eq, E> ClosedHashDictionary<K, E> {
    /// Creates a new, empty dictionary with [`DEFAULT_CAP`] slots, hashing with [`RollingState`].
    pub fn new() -> ClosedHashDictionary<K, E> {
        ClosedHashDictionary::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty dictionary with `cap` slots (at least 1), hashing with
    /// [`RollingState`].
    pub fn with_cap(cap: usize) -> ClosedHashDictionary<K, E> {
        ClosedHashDictionary::with_cap_and_hasher(cap, RollingState)
    }
}

impl<K: Hash + Eq, E, B: BuildHasher> ClosedHashDictionary<K, E, B> {
    /// Creates a new, empty dictionary with [`DEFAULT_CAP`] slots and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> ClosedHashDictionary<K, E, B> {
        ClosedHashDictionary::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new, empty dictionary with `cap` slots (at least 1) and the provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> ClosedHashDictionary<K, E, B> {
        ClosedHashDictionary {
            slots: empty_slots(cmp::max(cap, MIN_CAP)),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of slots in the table.
    pub const fn cap(&self) -> usize {
        self.slots.len()
    }
}

impl<K: Hash + Eq, E, B: BuildHasher> ClosedHashDictionary<K, E, B> {
    /// Determines whether the table has reached the load factor, meaning that it should grow
    /// before inserting another entry.
    pub(crate) const fn should_grow(&self) -> bool {
        self.len * LOAD_FACTOR_DENOMINATOR >= self.cap() * LOAD_FACTOR_NUMERATOR
    }

    /// Grows the table by the growth factor, placing every entry again.
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap() * GROWTH_FACTOR;
        debug!(old_cap = self.cap(), new_cap, len = self.len, "growing closed hash table");

        // Replace the slots first so that we can consume the old ones.
        let old_slots = mem::replace(&mut self.slots, empty_slots(new_cap));
        self.len = 0;

        for (key, element) in Vec::from(old_slots).into_iter().flatten() {
            // UNREACHABLE: The new table is larger than the old one, which held every entry.
            self.place(key, element).throw();
        }
    }

    /// Returns the home slot of `key`, where probing for it begins.
    pub(crate) fn home_slot(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.cap() as u64) as usize
    }

    /// Returns an iterator over the indices of every slot, in probe order for `key`.
    fn probe(&self, key: &K) -> impl Iterator<Item = usize> + use<K, E, B> {
        let home = self.home_slot(key);
        let cap = self.cap();
        (0..cap).map(move |offset| (home + offset) % cap)
    }

    /// Finds the slot holding `key`, probing from its home slot until the first vacant slot.
    pub(crate) fn find_slot(&self, key: &K) -> Option<usize> {
        for index in self.probe(key) {
            match &self.slots[index] {
                Some((existing, _)) if existing == key => return Some(index),
                Some(_) => {},
                None => return None,
            }
        }
        None
    }

    /// Fills the vacant slot at `gap` from the rest of its run, repeating for each slot that is
    /// vacated in turn, until the run ends.
    fn close_gap(&mut self, mut gap: usize) {
        let cap = self.cap();
        let mut index = gap;

        loop {
            index = (index + 1) % cap;

            // The gap itself is vacant, so this ends at the latest after a full cycle.
            let home = match &self.slots[index] {
                Some((key, _)) => self.home_slot(key),
                None => return,
            };

            // An entry whose home lies cyclically within (gap, index] is still reachable.
            let reachable = if gap <= index {
                gap < home && home <= index
            } else {
                gap < home || home <= index
            };

            if !reachable {
                trace!(from = index, to = gap, "shifting displaced entry back");
                self.slots[gap] = self.slots[index].take();
                gap = index;
            }
        }
    }

    /// Stores a new entry in the first vacant slot at or after the home slot of `key`, without
    /// checking for duplicates or growing.
    pub(crate) fn place(&mut self, key: K, element: E) -> Result<(), TableFull> {
        let vacant = self.probe(&key).find(|&index| self.slots[index].is_none());

        match vacant {
            Some(index) => {
                self.slots[index] = Some((key, element));
                self.len += 1;
                Ok(())
            },
            None => Err(TableFull {
                capacity: self.cap(),
            }),
        }
    }

    /// Finds the slot holding `key`, distinguishing an empty dictionary from a missing key.
    fn lookup(&self, key: &K) -> Result<usize, DictionaryError> {
        if self.len == 0 {
            return Err(EmptyCollection.into());
        }

        self.find_slot(key).ok_or(KeyNotFound.into())
    }
}

impl<K: Hash + Eq, E, B: BuildHasher> Dictionary<K, E> for ClosedHashDictionary<K, E, B> {
    type Iter<'a>
        = Iter<'a, K, E>
    where
        Self: 'a,
        K: 'a,
        E: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, key: K, element: E) -> Result<(), DictionaryError> {
        if self.find_slot(&key).is_some() {
            return Err(DuplicateKey.into());
        }

        if self.should_grow() {
            self.grow();
        }

        Ok(self.place(key, element)?)
    }

    fn remove(&mut self, key: &K) -> Result<E, DictionaryError> {
        let index = self.lookup(key)?;
        let removed = self.slots[index].take();
        self.len -= 1;
        self.close_gap(index);

        match removed {
            Some((_, element)) => Ok(element),
            None => Err(KeyNotFound.into()),
        }
    }

    fn get(&self, key: &K) -> Result<&E, DictionaryError> {
        let index = self.lookup(key)?;

        match &self.slots[index] {
            Some((_, element)) => Ok(element),
            None => Err(KeyNotFound.into()),
        }
    }

    fn contains_key(&self, key: &K) -> bool {
        self.find_slot(key).is_some()
    }

    fn update(&mut self, key: &K, element: E) -> Result<E, DictionaryError> {
        let index = self.lookup(key)?;

        match &mut self.slots[index] {
            Some((_, existing)) => Ok(mem::replace(existing, element)),
            None => Err(KeyNotFound.into()),
        }
    }

    fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.len = 0;
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.into_iter()
    }
}

fn empty_slots<K, E>(cap: usize) -> Box<[Slot<K, E>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

impl<K: Hash + Eq, E> Default for ClosedHashDictionary<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, E: Clone, B: Clone> Clone for ClosedHashDictionary<K, E, B> {
    fn clone(&self) -> Self {
        ClosedHashDictionary {
            slots: self.slots.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, E: PartialEq, B: BuildHasher> PartialEq for ClosedHashDictionary<K, E, B> {
    /// Two dictionaries are equal if they hold equal elements under the same keys, regardless of
    /// capacity or slot placement.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|(key, element)| other.get(key).is_ok_and(|found| found == element))
    }
}

impl<K: Hash + Eq, E: Eq, B: BuildHasher> Eq for ClosedHashDictionary<K, E, B> {}

impl<K: Debug, E: Debug, B: Debug> Debug for ClosedHashDictionary<K, E, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let slots: Vec<DebugRaw> = self.slots.iter()
            .map(|slot| DebugRaw(match slot {
                Some((key, element)) => format!("({key:?}: {element:?})"),
                None => "-".into(),
            }))
            .collect();

        f.debug_struct("ClosedHashDictionary")
            .field("slots", &slots)
            .field("len", &self.len)
            .field("cap", &self.slots.len())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Display, E: Display, B> Display for ClosedHashDictionary<K, E, B> {
    /// Renders the entries in slot order, as `{key: element, key: element}`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_entries(f, self.into_iter())
    }
}
