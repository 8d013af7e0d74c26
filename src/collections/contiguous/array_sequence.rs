use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::collections::traits::{EmptyCollection, InvalidPosition, PositionalSequence};
use crate::util::fmt::{DebugIter, write_bracketed};
use crate::util::result::ResultExtension;

/// The capacity used by [`ArraySequence::new`].
pub const DEFAULT_CAP: usize = 20;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A [`PositionalSequence`] stored in a contiguous buffer, where positions are 1-based indices.
///
/// Position `i` refers to the `i`th element and `len + 1` is the end position. Because of this,
/// positions remain meaningful after insertion and removal, although they may refer to a
/// different element.
///
/// When an insertion would exceed the capacity, the buffer is replaced by one with double the
/// capacity and the existing elements are moved across in order.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArraySequence.
/// - `i`: The position of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `read/write` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `insert_at` | `O(n-i)`, `O(n)`* |
/// | `remove_at` | `O(n-i)` |
/// | `push_back` | `O(1)`, `O(n)`* |
/// | `push_front` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* If the buffer doesn't have enough capacity for the new element, it is reallocated first.
///
/// # Examples
/// ```
/// # use positional_collections::collections::contiguous::ArraySequence;
/// # use positional_collections::collections::traits::PositionalSequence;
/// let mut seq = ArraySequence::new();
/// seq.push_back('b');
/// seq.push_front('a');
/// assert_eq!(seq.read(1), Ok(&'a'));
/// assert!(seq.is_end(3));
/// assert_eq!(seq.to_string(), "[a,b]");
/// ```
pub struct ArraySequence<T> {
    pub(crate) buf: Box<[Option<T>]>,
    pub(crate) len: usize,
}

impl<T> ArraySequence<T> {
    /// Creates a new, empty ArraySequence with a capacity of [`DEFAULT_CAP`].
    pub fn new() -> ArraySequence<T> {
        ArraySequence::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty ArraySequence with the provided capacity (at least 1).
    pub fn with_cap(cap: usize) -> ArraySequence<T> {
        ArraySequence {
            buf: empty_buf(cmp::max(cap, MIN_CAP)),
            len: 0,
        }
    }

    /// Returns the current capacity of the ArraySequence.
    pub const fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Removes all elements, keeping the current capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.buf[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }
}

impl<T> ArraySequence<T> {
    /// Converts `pos` into a buffer index, if it refers to an element.
    pub(crate) const fn check_element(&self, pos: usize) -> Result<usize, InvalidPosition> {
        if pos >= 1 && pos <= self.len {
            Ok(pos - 1)
        } else {
            Err(InvalidPosition)
        }
    }

    /// Converts `pos` into a buffer index, if it is a valid insertion point (including the end).
    pub(crate) const fn check_insert(&self, pos: usize) -> Result<usize, InvalidPosition> {
        if pos >= 1 && pos <= self.len + 1 {
            Ok(pos - 1)
        } else {
            Err(InvalidPosition)
        }
    }

    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP);
        self.realloc_with_cap(new_cap);
    }

    /// Moves all elements into a new buffer of `new_cap` slots. Does nothing if the elements
    /// wouldn't fit.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap < self.len {
            return;
        }

        trace!(old_cap = self.cap(), new_cap, len = self.len, "reallocating array sequence");

        let mut new_buf = empty_buf(new_cap);
        for (new_slot, old_slot) in new_buf.iter_mut().zip(&mut self.buf[..self.len]) {
            *new_slot = old_slot.take();
        }
        self.buf = new_buf;
    }
}

fn empty_buf<T>(cap: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

impl<T> PositionalSequence for ArraySequence<T> {
    type Element = T;

    type Position = usize;

    fn len(&self) -> usize {
        self.len
    }

    fn first(&self) -> usize {
        1
    }

    fn last(&self) -> Result<usize, EmptyCollection> {
        match self.len {
            0 => Err(EmptyCollection),
            len => Ok(len),
        }
    }

    fn end(&self) -> usize {
        self.len + 1
    }

    fn is_end(&self, pos: usize) -> bool {
        pos == self.len + 1
    }

    fn next(&self, pos: usize) -> Result<usize, InvalidPosition> {
        self.check_element(pos)?;
        Ok(pos + 1)
    }

    fn prev(&self, pos: usize) -> Result<usize, InvalidPosition> {
        if pos >= 2 && pos <= self.len + 1 {
            Ok(pos - 1)
        } else {
            Err(InvalidPosition)
        }
    }

    fn read(&self, pos: usize) -> Result<&T, InvalidPosition> {
        let index = self.check_element(pos)?;
        self.buf[index].as_ref().ok_or(InvalidPosition)
    }

    fn read_mut(&mut self, pos: usize) -> Result<&mut T, InvalidPosition> {
        let index = self.check_element(pos)?;
        self.buf[index].as_mut().ok_or(InvalidPosition)
    }

    fn insert_at(&mut self, value: T, pos: usize) -> Result<usize, InvalidPosition> {
        let index = self.check_insert(pos)?;

        if self.len == self.cap() {
            self.grow();
        }

        // The slot at len is empty, rotating moves it to index and shifts the tail right by one.
        self.buf[index..=self.len].rotate_right(1);
        self.buf[index] = Some(value);
        self.len += 1;

        Ok(pos)
    }

    fn remove_at(&mut self, pos: usize) -> Result<(T, usize), InvalidPosition> {
        let index = self.check_element(pos)?;

        let value = self.buf[index].take().ok_or(InvalidPosition)?;
        // Shift the tail left by one, leaving the emptied slot at the old last index.
        self.buf[index..self.len].rotate_left(1);
        self.len -= 1;

        // The following element has moved into pos.
        Ok((value, pos))
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), InvalidPosition> {
        let a = self.check_element(a)?;
        let b = self.check_element(b)?;
        self.buf.swap(a, b);
        Ok(())
    }
}

impl<T> Index<usize> for ArraySequence<T> {
    type Output = T;

    /// Returns a reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` doesn't refer to an element.
    fn index(&self, pos: usize) -> &Self::Output {
        self.read(pos).throw()
    }
}

impl<T> IndexMut<usize> for ArraySequence<T> {
    fn index_mut(&mut self, pos: usize) -> &mut Self::Output {
        self.read_mut(pos).throw()
    }
}

impl<T> Extend<T> for ArraySequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for ArraySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut seq = ArraySequence::with_cap(iter.size_hint().0);
        seq.extend(iter);
        seq
    }
}

impl<T> Default for ArraySequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArraySequence<T> {
    fn clone(&self) -> Self {
        let mut seq = ArraySequence::with_cap(self.cap());
        seq.extend(self.iter().cloned());
        seq
    }
}

impl<T: PartialEq> PartialEq for ArraySequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArraySequence<T> {}

impl<T: Debug> Debug for ArraySequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArraySequence")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for ArraySequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.iter())
    }
}
