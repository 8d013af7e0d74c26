use std::iter::FusedIterator;
use std::vec;

use super::ArraySequence;
use crate::collections::traits::{Iter, PositionalSequence};

impl<T> IntoIterator for ArraySequence<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = Vec::from(self.buf);
        slots.truncate(self.len);
        IntoIter(slots.into_iter())
    }
}

/// A type for owned iteration over an [`ArraySequence`]. Produces values of type `T`.
pub struct IntoIter<T>(pub(crate) vec::IntoIter<Option<T>>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a ArraySequence<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, ArraySequence<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
