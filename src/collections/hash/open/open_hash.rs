use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};
use std::iter;
use std::marker::PhantomData;
use std::mem;

use super::Iter;
use crate::collections::contiguous::ArraySequence;
use crate::collections::hash::{
    DEFAULT_CAP, DictionaryError, DuplicateKey, KeyNotFound, MIN_CAP, RollingState,
};
use crate::collections::traits::{Dictionary, EmptyCollection, InvalidPosition, PositionalSequence};
use crate::util::fmt::{DebugRaw, write_entries};
use crate::util::result::ResultExtension;

/// A [`Dictionary`] that keeps a fixed number of buckets, each a [`PositionalSequence`] of the
/// entries whose keys hash to it.
///
/// The bucket of a key is `hash(key) % cap`. New entries are appended to the back of their bucket
/// and lookups scan the bucket from the front. The number of buckets never changes, so chains get
/// longer as more entries are added.
///
/// Any sequence of `(K, E)` pairs that implements [`Default`] can be used for the buckets,
/// [`ArraySequence`] being the default.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the dictionary.
/// - `c`: The number of buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(n/c)`* |
/// | `get/update` | `O(n/c)` |
/// | `contains_key` | `O(n/c)` |
/// | `remove` | `O(n/c)`** |
/// | `clear` | `O(n+c)` |
///
/// \* Assuming keys are spread evenly between buckets. Each operation scans a single bucket.
///
/// \** Plus the cost of removing from the bucket, which is `O(n/c)` for an [`ArraySequence`].
///
/// # Examples
/// ```
/// # use positional_collections::collections::hash::OpenHashDictionary;
/// # use positional_collections::collections::traits::Dictionary;
/// let mut dict = OpenHashDictionary::new();
/// dict.insert("one", 1).unwrap();
/// assert!(dict.insert("one", 2).is_err());
/// assert_eq!(dict.get(&"one"), Ok(&1));
/// assert_eq!(dict.buckets(), 20);
/// ```
pub struct OpenHashDictionary<K, E, S = ArraySequence<(K, E)>, B = RollingState> {
    pub(crate) buckets: Box<[S]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
    pub(crate) _entries: PhantomData<(K, E)>,
}

impl<K, E> OpenHashDictionary<K, E>
where
    K: Hash + Eq,
{
    /// Creates a new, empty dictionary with [`DEFAULT_CAP`] [`ArraySequence`] buckets, hashing
    /// with [`RollingState`].
    pub fn new() -> OpenHashDictionary<K, E> {
        OpenHashDictionary::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty dictionary with `cap` [`ArraySequence`] buckets (at least 1), hashing
    /// with [`RollingState`].
    pub fn with_cap(cap: usize) -> OpenHashDictionary<K, E> {
        OpenHashDictionary::with_cap_and_hasher(cap, RollingState)
    }
}

impl<K, E, S, B> OpenHashDictionary<K, E, S, B>
where
    K: Hash + Eq,
    S: PositionalSequence<Element = (K, E)> + Default,
    B: BuildHasher,
{
    /// Creates a new, empty dictionary with [`DEFAULT_CAP`] buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> OpenHashDictionary<K, E, S, B> {
        OpenHashDictionary::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new, empty dictionary with `cap` buckets (at least 1) and the provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> OpenHashDictionary<K, E, S, B> {
        OpenHashDictionary {
            buckets: empty_buckets(cmp::max(cap, MIN_CAP)),
            len: 0,
            hasher,
            _entries: PhantomData,
        }
    }

    /// Returns the number of buckets, which is fixed for the lifetime of the dictionary.
    pub const fn buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the index of the bucket that holds any entry for `key`.
    pub(crate) fn bucket_index(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.buckets() as u64) as usize
    }

    /// Finds the bucket for `key` and the position of its entry in that bucket, if any.
    ///
    /// # Panics
    /// Panics if the bucket sequence rejects one of its own positions.
    pub(crate) fn find(&self, key: &K) -> (usize, Option<S::Position>) {
        let index = self.bucket_index(key);
        let pos = find_in_bucket(&self.buckets[index], key).throw();
        (index, pos)
    }

    /// Finds the entry for `key`, distinguishing an empty dictionary from a missing key.
    fn lookup(&self, key: &K) -> Result<(usize, S::Position), DictionaryError> {
        if self.len == 0 {
            return Err(EmptyCollection.into());
        }

        match self.find(key) {
            (index, Some(pos)) => Ok((index, pos)),
            (_, None) => Err(KeyNotFound.into()),
        }
    }
}

/// Scans `bucket` from the front for an entry with a key equal to `key`.
fn find_in_bucket<K, E, S>(bucket: &S, key: &K) -> Result<Option<S::Position>, InvalidPosition>
where
    K: Eq,
    S: PositionalSequence<Element = (K, E)>,
{
    let mut pos = bucket.first();
    while !bucket.is_end(pos) {
        if bucket.read(pos)?.0 == *key {
            return Ok(Some(pos));
        }
        pos = bucket.next(pos)?;
    }
    Ok(None)
}

fn empty_buckets<S: Default>(cap: usize) -> Box<[S]> {
    iter::repeat_with(S::default).take(cap).collect()
}

impl<K, E, S, B> Dictionary<K, E> for OpenHashDictionary<K, E, S, B>
where
    K: Hash + Eq,
    S: PositionalSequence<Element = (K, E)> + Default,
    B: BuildHasher,
{
    type Iter<'a>
        = Iter<'a, S>
    where
        Self: 'a,
        K: 'a,
        E: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, key: K, element: E) -> Result<(), DictionaryError> {
        let (index, existing) = self.find(&key);
        if existing.is_some() {
            return Err(DuplicateKey.into());
        }

        self.buckets[index].push_back((key, element));
        self.len += 1;
        Ok(())
    }

    /// Removes the entry for `key`, returning its element.
    ///
    /// # Panics
    /// Panics if the bucket sequence rejects one of its own positions.
    fn remove(&mut self, key: &K) -> Result<E, DictionaryError> {
        let (index, pos) = self.lookup(key)?;
        let ((_, element), _) = self.buckets[index].remove_at(pos).throw();
        self.len -= 1;
        Ok(element)
    }

    fn get(&self, key: &K) -> Result<&E, DictionaryError> {
        let (index, pos) = self.lookup(key)?;
        Ok(&self.buckets[index].read(pos).throw().1)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.find(key).1.is_some()
    }

    fn update(&mut self, key: &K, element: E) -> Result<E, DictionaryError> {
        let (index, pos) = self.lookup(key)?;
        let (_, existing) = self.buckets[index].read_mut(pos).throw();
        Ok(mem::replace(existing, element))
    }

    fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = S::default();
        }
        self.len = 0;
    }

    fn iter(&self) -> Self::Iter<'_> {
        Iter::new(&self.buckets, self.len)
    }
}

impl<K: Hash + Eq, E> Default for OpenHashDictionary<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, E, S: Clone, B: Clone> Clone for OpenHashDictionary<K, E, S, B> {
    fn clone(&self) -> Self {
        OpenHashDictionary {
            buckets: self.buckets.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
            _entries: PhantomData,
        }
    }
}

impl<K, E, S, B> PartialEq for OpenHashDictionary<K, E, S, B>
where
    K: Hash + Eq,
    E: PartialEq,
    S: PositionalSequence<Element = (K, E)> + Default,
    B: BuildHasher,
{
    /// Two dictionaries are equal if they hold equal elements under the same keys, regardless of
    /// how the entries are spread over the buckets.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|(key, element)| other.get(key).is_ok_and(|found| found == element))
    }
}

impl<K, E, S, B> Debug for OpenHashDictionary<K, E, S, B>
where
    K: Debug,
    E: Debug,
    S: PositionalSequence<Element = (K, E)>,
    B: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vec<DebugRaw> = self.buckets.iter()
            .map(|bucket| {
                let entries: Vec<String> = bucket.iter()
                    .map(|(key, element)| format!("({key:?}: {element:?})"))
                    .collect();
                DebugRaw(format!("[{}]", entries.join(", ")))
            })
            .collect();

        f.debug_struct("OpenHashDictionary")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K, E, S, B> Display for OpenHashDictionary<K, E, S, B>
where
    K: Display,
    E: Display,
    S: PositionalSequence<Element = (K, E)>,
{
    /// Renders the entries bucket by bucket, as `{key: element, key: element}`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_entries(f, Iter::new(&self.buckets, self.len))
    }
}
