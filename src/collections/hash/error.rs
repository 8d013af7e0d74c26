use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::util::error::EmptyCollection;

/// An entry with an equal key is already present in the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateKey;

impl Display for DuplicateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "An entry with the same key already exists!")
    }
}

impl Error for DuplicateKey {}

/// The dictionary contains no entry for the requested key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound;

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The key is not present in the dictionary!")
    }
}

impl Error for KeyNotFound {}

/// A full probe cycle found no vacant slot for a new entry.
///
/// Closed hashing grows before the table can fill up, so this can't be produced through
/// [`Dictionary::insert`](crate::collections::traits::Dictionary::insert) in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFull {
    /// The number of slots in the table at the time of the failure.
    pub capacity: usize,
}

impl Display for TableFull {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to find a vacant slot in a table of {} slots!", self.capacity)
    }
}

impl Error for TableFull {}

/// Any error produced by a [`Dictionary`](crate::collections::traits::Dictionary) operation.
///
/// Lookups on an empty dictionary fail with [`EmptyCollection`], while lookups of an absent key in
/// a non-empty one fail with [`KeyNotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum DictionaryError {
    DuplicateKey(DuplicateKey),
    KeyNotFound(KeyNotFound),
    TableFull(TableFull),
    EmptyCollection(EmptyCollection),
}
