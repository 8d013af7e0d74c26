use std::iter::FusedIterator;

use super::LinkedSequence;
use crate::collections::traits::{Iter, PositionalSequence};

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// A type for owned iteration over a [`LinkedSequence`]. Produces values of type `T`.
pub struct IntoIter<T>(pub(crate) LinkedSequence<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, LinkedSequence<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
