use std::iter::FusedIterator;
use std::{slice, vec};

use super::ClosedHashDictionary;
use super::closed_hash::Slot;

impl<K, E, B> IntoIterator for ClosedHashDictionary<K, E, B> {
    type Item = (K, E);

    type IntoIter = IntoIter<K, E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: Vec::from(self.slots).into_iter(),
        }
    }
}

/// A type for owned iteration over the entries of a [`ClosedHashDictionary`], in slot order.
pub struct IntoIter<K, E> {
    pub(crate) inner: vec::IntoIter<Slot<K, E>>,
    pub(crate) len: usize,
}

impl<K, E> Iterator for IntoIter<K, E> {
    type Item = (K, E);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.by_ref().flatten().next()?;
        self.len -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, E> ExactSizeIterator for IntoIter<K, E> {}

impl<K, E> FusedIterator for IntoIter<K, E> {}

impl<'a, K, E, B> IntoIterator for &'a ClosedHashDictionary<K, E, B> {
    type Item = (&'a K, &'a E);

    type IntoIter = Iter<'a, K, E>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len,
            inner: self.slots.iter(),
        }
    }
}

/// A type for borrowed iteration over the entries of a [`ClosedHashDictionary`], in slot order.
pub struct Iter<'a, K, E> {
    pub(crate) inner: slice::Iter<'a, Slot<K, E>>,
    pub(crate) len: usize,
}

impl<'a, K, E> Iterator for Iter<'a, K, E> {
    type Item = (&'a K, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, element) = self.inner.by_ref().flatten().next()?;
        self.len -= 1;
        Some((key, element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, E> ExactSizeIterator for Iter<'_, K, E> {}

impl<K, E> FusedIterator for Iter<'_, K, E> {}

impl<K, E> Clone for Iter<'_, K, E> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}
