use super::{PositionalSequence, SequenceError};
use crate::util::result::ResultExtension;

/// Algorithms written purely against [`PositionalSequence`], so that every realization gets them
/// without any code of its own. Implemented for all sequences.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the sequence.
///
/// | Method | Complexity |
/// |-|-|
/// | `reverse` | `O(n)` |
/// | `is_palindrome` | `O(n)` |
/// | `bubble_sort` | `O(n^2)` |
/// | `quicksort` | `O(n log n)`*, `O(n^2)` |
///
/// \* On average. The last element of each range is used as the pivot, so already ordered input
/// hits the quadratic worst case.
///
/// All methods panic if the underlying realization breaks the position contract, e.g. by rejecting
/// a position that it just returned.
pub trait SequenceAlgorithms: PositionalSequence {
    /// Reverses the order of the elements in place, by swapping mirrored positions while walking
    /// inwards from both ends.
    ///
    /// # Panics
    /// Panics if the realization breaks the position contract.
    fn reverse(&mut self) {
        try_reverse(self).throw()
    }

    /// Returns true if the sequence reads the same forwards and backwards.
    ///
    /// # Panics
    /// Panics if the realization breaks the position contract.
    fn is_palindrome(&self) -> bool
    where
        Self::Element: PartialEq,
    {
        try_is_palindrome(self).throw()
    }

    /// Sorts the sequence in non-decreasing order by repeatedly swapping adjacent elements. The
    /// sort is stable.
    ///
    /// # Panics
    /// Panics if the realization breaks the position contract.
    fn bubble_sort(&mut self)
    where
        Self::Element: PartialOrd,
    {
        try_bubble_sort(self).throw()
    }

    /// Sorts the sequence in non-decreasing order with a recursive quicksort, partitioning each
    /// range around its last element. The sort isn't stable.
    ///
    /// # Panics
    /// Panics if the realization breaks the position contract.
    fn quicksort(&mut self)
    where
        Self::Element: PartialOrd,
    {
        try_quicksort(self).throw()
    }
}

impl<S: PositionalSequence + ?Sized> SequenceAlgorithms for S {}

fn try_reverse<S>(seq: &mut S) -> Result<(), SequenceError>
where
    S: PositionalSequence + ?Sized,
{
    let len = seq.len();
    if len < 2 {
        return Ok(());
    }

    let mut front = seq.first();
    let mut back = seq.last()?;
    for _ in 0..len / 2 {
        seq.swap(front, back)?;
        front = seq.next(front)?;
        back = seq.prev(back)?;
    }
    Ok(())
}

fn try_is_palindrome<S>(seq: &S) -> Result<bool, SequenceError>
where
    S: PositionalSequence + ?Sized,
    S::Element: PartialEq,
{
    let len = seq.len();
    if len < 2 {
        return Ok(true);
    }

    let mut front = seq.first();
    let mut back = seq.last()?;
    for _ in 0..len / 2 {
        if seq.read(front)? != seq.read(back)? {
            return Ok(false);
        }
        front = seq.next(front)?;
        back = seq.prev(back)?;
    }
    Ok(true)
}

fn try_bubble_sort<S>(seq: &mut S) -> Result<(), SequenceError>
where
    S: PositionalSequence + ?Sized,
    S::Element: PartialOrd,
{
    let len = seq.len();
    for pass in 0..len.saturating_sub(1) {
        let mut p = seq.first();
        let mut q = seq.next(p)?;
        for _ in 0..len - pass - 1 {
            // Only strictly greater pairs are swapped, which keeps equal elements in order.
            if seq.read(p)? > seq.read(q)? {
                seq.swap(p, q)?;
            }
            p = q;
            q = seq.next(q)?;
        }
    }
    Ok(())
}

fn try_quicksort<S>(seq: &mut S) -> Result<(), SequenceError>
where
    S: PositionalSequence + ?Sized,
    S::Element: PartialOrd,
{
    let len = seq.len();
    if len < 2 {
        return Ok(());
    }

    let start = seq.first();
    let end = seq.last()?;
    sort_range(seq, start, end, len)
}

/// Sorts the `len` elements from `start` to `end` inclusive. Ranges are bounded by counts rather
/// than by comparing positions, because positions aren't ordered in general.
fn sort_range<S>(
    seq: &mut S,
    start: S::Position,
    end: S::Position,
    len: usize,
) -> Result<(), SequenceError>
where
    S: PositionalSequence + ?Sized,
    S::Element: PartialOrd,
{
    if len < 2 {
        return Ok(());
    }

    let (pivot, low_len) = partition(seq, start, end)?;
    let high_len = len - low_len - 1;

    if low_len > 1 {
        let low_end = seq.prev(pivot)?;
        sort_range(seq, start, low_end, low_len)?;
    }
    if high_len > 1 {
        let high_start = seq.next(pivot)?;
        sort_range(seq, high_start, end, high_len)?;
    }
    Ok(())
}

/// Moves every element `<=` the pivot (the element at `end`) before a running boundary, then swaps
/// the pivot into place. Returns the pivot's final position and the number of elements before it.
fn partition<S>(
    seq: &mut S,
    start: S::Position,
    end: S::Position,
) -> Result<(S::Position, usize), SequenceError>
where
    S: PositionalSequence + ?Sized,
    S::Element: PartialOrd,
{
    // The last position of the low side, or None while the low side is empty.
    let mut boundary: Option<S::Position> = None;
    let mut low_len = 0;

    let mut current = start;
    while current != end {
        if seq.read(current)? <= seq.read(end)? {
            let slot = match boundary {
                Some(pos) => seq.next(pos)?,
                None => start,
            };
            seq.swap(slot, current)?;
            boundary = Some(slot);
            low_len += 1;
        }
        current = seq.next(current)?;
    }

    let pivot = match boundary {
        Some(pos) => seq.next(pos)?,
        None => start,
    };
    seq.swap(pivot, end)?;
    Ok((pivot, low_len))
}
