use crate::collections::contiguous::ArraySequence;
use crate::collections::hash::DictionaryError;

/// A collection of elements, each identified by a unique key.
///
/// Implemented by [`ClosedHashDictionary`](crate::collections::hash::ClosedHashDictionary) and
/// [`OpenHashDictionary`](crate::collections::hash::OpenHashDictionary). At most one entry exists
/// per key at any time.
pub trait Dictionary<K, E> {
    /// Borrowed iteration over the entries of the dictionary.
    type Iter<'a>: Iterator<Item = (&'a K, &'a E)>
    where
        Self: 'a,
        K: 'a,
        E: 'a;

    /// Returns the number of entries in the dictionary.
    fn len(&self) -> usize;

    /// Returns true if the dictionary contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a new entry. Fails with [`DuplicateKey`](crate::collections::hash::DuplicateKey) if
    /// `key` is already present, in which case the dictionary is left unchanged.
    fn insert(&mut self, key: K, element: E) -> Result<(), DictionaryError>;

    /// Removes the entry for `key`, returning its element.
    fn remove(&mut self, key: &K) -> Result<E, DictionaryError>;

    /// Returns a reference to the element associated with `key`.
    fn get(&self, key: &K) -> Result<&E, DictionaryError>;

    /// Returns true if there is an entry for `key`.
    fn contains_key(&self, key: &K) -> bool;

    /// Replaces the element associated with `key`, returning the previous one.
    fn update(&mut self, key: &K, element: E) -> Result<E, DictionaryError>;

    /// Removes all entries, keeping the current capacity.
    fn clear(&mut self);

    /// Returns an iterator over all entries. The order depends on the hash of each key, not on
    /// insertion order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Collects copies of all keys, in iteration order.
    fn keys(&self) -> ArraySequence<K>
    where
        K: Clone,
    {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Collects copies of all elements, in iteration order.
    fn values(&self) -> ArraySequence<E>
    where
        E: Clone,
    {
        self.iter().map(|(_, element)| element.clone()).collect()
    }
}
