use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::ArraySequence;
use crate::collections::traits::{EmptyCollection, InvalidPosition, Iter, PositionalSequence};
use crate::util::fmt::{DebugIter, write_bracketed};
use crate::util::result::ResultExtension;

/// A sequence that keeps its elements in non-decreasing order, backed by an [`ArraySequence`].
///
/// Elements can only be added through [`insert`](OrderedSequence::insert), which finds the correct
/// place for them, so no mutable positional access is provided. Duplicates are permitted and keep
/// their insertion order relative to each other.
///
/// All searching is done with a linear scan from the front, even where the ordering would allow a
/// binary search.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the OrderedSequence.
/// - `m`: The number of items in the other OrderedSequence.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `read` | `O(1)` |
/// | `insert` | `O(n)` |
/// | `search` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `merge` | `O(n*m)` |
/// | `is_subsequence` | `O(n*m)` |
/// | `difference` | `O(n^2*m)` |
///
/// # Examples
/// ```
/// # use positional_collections::collections::ordered::OrderedSequence;
/// let mut seq = OrderedSequence::new();
/// seq.insert(5);
/// seq.insert(3);
/// seq.insert(8);
/// assert_eq!(seq.to_string(), "[3,5,8]");
/// assert!(seq.search(&5));
/// ```
pub struct OrderedSequence<T> {
    pub(crate) list: ArraySequence<T>,
}

impl<T> OrderedSequence<T> {
    /// Creates a new, empty OrderedSequence.
    pub fn new() -> OrderedSequence<T> {
        OrderedSequence {
            list: ArraySequence::new(),
        }
    }

    /// Returns the number of elements in the OrderedSequence.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the OrderedSequence contains no elements.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the position of the smallest element, or the end position if empty.
    pub fn first(&self) -> usize {
        self.list.first()
    }

    /// Returns the position of the largest element.
    pub fn last(&self) -> Result<usize, EmptyCollection> {
        self.list.last()
    }

    /// Returns true if `pos` is the end position.
    pub fn is_end(&self, pos: usize) -> bool {
        self.list.is_end(pos)
    }

    /// Returns the position following `pos`.
    pub fn next(&self, pos: usize) -> Result<usize, InvalidPosition> {
        self.list.next(pos)
    }

    /// Returns the position preceding `pos`.
    pub fn prev(&self, pos: usize) -> Result<usize, InvalidPosition> {
        self.list.prev(pos)
    }

    /// Returns a reference to the element at `pos`.
    pub fn read(&self, pos: usize) -> Result<&T, InvalidPosition> {
        self.list.read(pos)
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, ArraySequence<T>> {
        self.list.iter()
    }
}

impl<T: PartialOrd> OrderedSequence<T> {
    /// Inserts `value` before the first element that is strictly greater than it, or at the back
    /// if there is no such element.
    pub fn insert(&mut self, value: T) {
        let pos = match self.list.iter().position(|element| *element > value) {
            Some(index) => index + 1,
            None => self.list.end(),
        };

        // UNREACHABLE: pos is either an element position or the end position.
        self.list.insert_at(value, pos).throw();
    }

    /// Returns true if an element equal to `value` is present.
    pub fn search(&self, value: &T) -> bool {
        self.list.contains(value)
    }

    /// Removes and returns the first element equal to `value`, leaving the OrderedSequence
    /// unchanged if there is none.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.list.iter().position(|element| element == value)?;

        // UNREACHABLE: index was produced by iterating over the current elements.
        Some(self.list.remove_at(index + 1).throw().0)
    }

    /// Inserts a copy of every element of `other`, keeping the combined contents ordered.
    pub fn merge(&mut self, other: &OrderedSequence<T>)
    where
        T: Clone,
    {
        for element in other.iter() {
            self.insert(element.clone());
        }
    }

    /// Removes every element of `self` that is equal to any element of `other`, including all
    /// repeated occurrences.
    pub fn difference(&mut self, other: &OrderedSequence<T>) {
        for element in other.iter() {
            while self.remove(element).is_some() {}
        }
    }

    /// Determines whether `small` occurs in `big` as a contiguous run.
    ///
    /// `big` is scanned once from the front. Whenever a partial match of `small` breaks, matching
    /// restarts from the start of `small` while `big` moves on past the element that broke the
    /// run, without comparing it against the start of `small` again. As a result, a run that
    /// starts on the element that broke a previous partial match isn't found, e.g. `[1, 2]` isn't
    /// reported in `[1, 1, 2]`.
    ///
    /// An empty `small` is a subsequence of everything, while a `small` longer than `big` never
    /// is.
    ///
    /// # Panics
    /// Panics if the backing sequence rejects one of its own positions.
    pub fn is_subsequence(big: &OrderedSequence<T>, small: &OrderedSequence<T>) -> bool {
        if small.len() > big.len() {
            return false;
        }

        try_is_subsequence(&big.list, &small.list).throw()
    }
}

fn try_is_subsequence<S>(big: &S, small: &S) -> Result<bool, InvalidPosition>
where
    S: PositionalSequence,
    S::Element: PartialEq,
{
    let mut p = big.first();
    let mut q = small.first();

    while !big.is_end(p) && !small.is_end(q) {
        while !big.is_end(p) && !small.is_end(q) && big.read(p)? == small.read(q)? {
            p = big.next(p)?;
            q = small.next(q)?;
        }

        if !big.is_end(p) {
            p = big.next(p)?;
        }
        if !small.is_end(q) {
            q = small.first();
        }
    }

    Ok(small.is_end(q))
}

impl<T: PartialOrd> Extend<T> for OrderedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: PartialOrd> FromIterator<T> for OrderedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = OrderedSequence::new();
        seq.extend(iter);
        seq
    }
}

impl<'a, T> IntoIterator for &'a OrderedSequence<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, ArraySequence<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for OrderedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OrderedSequence<T> {
    fn clone(&self) -> Self {
        OrderedSequence {
            list: self.list.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for OrderedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for OrderedSequence<T> {}

impl<T: Debug> Debug for OrderedSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedSequence")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for OrderedSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.iter())
    }
}
