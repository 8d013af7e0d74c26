use std::fmt::Debug;
use std::iter::FusedIterator;
use std::mem;

#[doc(inline)]
pub use crate::util::error::{EmptyCollection, InvalidPosition, SequenceError};
use crate::util::result::ResultExtension;

/// An ordered container of elements, addressed through opaque positions.
///
/// A position either refers to an element or is the end position, which sits one past the last
/// element and never holds a value. Positions are only meaningful for the sequence that produced
/// them, and structural changes (insertion or removal) may invalidate previously obtained
/// positions.
///
/// Realizations only need to provide the positional primitives. Linear search, iteration and the
/// push / pop conveniences are written once in terms of those primitives, as are the algorithms in
/// [`SequenceAlgorithms`](super::SequenceAlgorithms).
pub trait PositionalSequence {
    /// The type of the stored values.
    type Element;

    /// The handle used to address elements of this sequence.
    type Position: Copy + Eq + Debug;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns true if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the position of the first element, or the end position if the sequence is empty.
    fn first(&self) -> Self::Position;

    /// Returns the position of the last element.
    fn last(&self) -> Result<Self::Position, EmptyCollection>;

    /// Returns the end position, one past the last element.
    fn end(&self) -> Self::Position;

    /// Returns true if `pos` is the end position.
    fn is_end(&self, pos: Self::Position) -> bool;

    /// Returns the position following `pos`. Fails if `pos` isn't the position of an element.
    fn next(&self, pos: Self::Position) -> Result<Self::Position, InvalidPosition>;

    /// Returns the position preceding `pos`. The end position precedes the last element, but
    /// nothing precedes the first one.
    fn prev(&self, pos: Self::Position) -> Result<Self::Position, InvalidPosition>;

    /// Returns a reference to the element at `pos`.
    fn read(&self, pos: Self::Position) -> Result<&Self::Element, InvalidPosition>;

    /// Returns a mutable reference to the element at `pos`.
    fn read_mut(&mut self, pos: Self::Position) -> Result<&mut Self::Element, InvalidPosition>;

    /// Replaces the element at `pos` with `value`, returning the previous element.
    fn write(
        &mut self,
        pos: Self::Position,
        value: Self::Element,
    ) -> Result<Self::Element, InvalidPosition> {
        Ok(mem::replace(self.read_mut(pos)?, value))
    }

    /// Inserts `value` before the element at `pos` (or at the back if `pos` is the end position)
    /// and returns the position of the new element.
    fn insert_at(
        &mut self,
        value: Self::Element,
        pos: Self::Position,
    ) -> Result<Self::Position, InvalidPosition>;

    /// Removes the element at `pos`, returning it along with the position of the element that
    /// followed it.
    fn remove_at(
        &mut self,
        pos: Self::Position,
    ) -> Result<(Self::Element, Self::Position), InvalidPosition>;

    /// Exchanges the elements at positions `a` and `b`.
    fn swap(&mut self, a: Self::Position, b: Self::Position) -> Result<(), InvalidPosition>;

    /// Adds `value` to the front of the sequence, returning its position.
    ///
    /// # Panics
    /// Panics if the realization rejects its own first position.
    fn push_front(&mut self, value: Self::Element) -> Self::Position {
        let first = self.first();
        self.insert_at(value, first).throw()
    }

    /// Adds `value` to the back of the sequence, returning its position.
    ///
    /// # Panics
    /// Panics if the realization rejects its own end position.
    fn push_back(&mut self, value: Self::Element) -> Self::Position {
        let end = self.end();
        self.insert_at(value, end).throw()
    }

    /// Removes and returns the first element.
    ///
    /// # Panics
    /// Panics if the realization rejects its own first position while non-empty.
    fn pop_front(&mut self) -> Result<Self::Element, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }
        let first = self.first();
        Ok(self.remove_at(first).throw().0)
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    /// Panics if the realization rejects its own last position.
    fn pop_back(&mut self) -> Result<Self::Element, EmptyCollection> {
        let last = self.last()?;
        Ok(self.remove_at(last).throw().0)
    }

    /// Returns true if an element equal to `value` is present, scanning from the front.
    fn contains(&self, value: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Returns an iterator over the elements in position order.
    fn iter(&self) -> Iter<'_, Self> {
        Iter {
            seq: self,
            pos: self.first(),
            remaining: self.len(),
        }
    }
}

/// Borrowed iteration over any [`PositionalSequence`], walking from [`first`] with [`next`].
///
/// # Panics
/// Iteration panics if the sequence runs out of elements before yielding [`len`] of them.
///
/// [`first`]: PositionalSequence::first
/// [`next`]: PositionalSequence::next
/// [`len`]: PositionalSequence::len
pub struct Iter<'a, S: PositionalSequence + ?Sized> {
    pub(crate) seq: &'a S,
    pub(crate) pos: S::Position,
    pub(crate) remaining: usize,
}

impl<'a, S: PositionalSequence + ?Sized> Iterator for Iter<'a, S> {
    type Item = &'a S::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let seq = self.seq;
        let value = seq.read(self.pos).throw();
        self.pos = seq.next(self.pos).throw();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: PositionalSequence + ?Sized> ExactSizeIterator for Iter<'_, S> {}

impl<S: PositionalSequence + ?Sized> FusedIterator for Iter<'_, S> {}

impl<S: PositionalSequence + ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Iter {
            seq: self.seq,
            pos: self.pos,
            remaining: self.remaining,
        }
    }
}
