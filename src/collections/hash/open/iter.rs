use std::iter::FusedIterator;
use std::slice;

use crate::collections::traits::{self, PositionalSequence};

/// A type for borrowed iteration over the entries of an
/// [`OpenHashDictionary`](super::OpenHashDictionary), bucket by bucket.
pub struct Iter<'a, S: PositionalSequence> {
    pub(crate) buckets: slice::Iter<'a, S>,
    pub(crate) current: Option<traits::Iter<'a, S>>,
    pub(crate) len: usize,
}

impl<'a, S: PositionalSequence> Iter<'a, S> {
    pub(crate) fn new(buckets: &'a [S], len: usize) -> Iter<'a, S> {
        Iter {
            buckets: buckets.iter(),
            current: None,
            len,
        }
    }
}

impl<'a, K: 'a, E: 'a, S> Iterator for Iter<'a, S>
where
    S: PositionalSequence<Element = (K, E)>,
{
    type Item = (&'a K, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entries) = &mut self.current
                && let Some((key, element)) = entries.next()
            {
                self.len -= 1;
                return Some((key, element));
            }

            // The current bucket is exhausted, move on to the next one.
            self.current = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K: 'a, E: 'a, S> ExactSizeIterator for Iter<'a, S>
where
    S: PositionalSequence<Element = (K, E)>,
{
}

impl<'a, K: 'a, E: 'a, S> FusedIterator for Iter<'a, S>
where
    S: PositionalSequence<Element = (K, E)>,
{
}

impl<S: PositionalSequence> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets.clone(),
            current: self.current.clone(),
            len: self.len,
        }
    }
}
