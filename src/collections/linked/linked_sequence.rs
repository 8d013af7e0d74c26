use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Link, Node, SENTINEL};
use crate::collections::traits::{EmptyCollection, InvalidPosition, PositionalSequence};
use crate::util::fmt::{DebugIter, write_bracketed};
use crate::util::result::ResultExtension;

/// A [`PositionalSequence`] stored as a circular, doubly linked chain of nodes around a sentinel.
///
/// The sentinel's `next` is the first element and its `prev` is the last one, so an empty sequence
/// is just the sentinel linked to itself. Positions are [`Link`]s to nodes, with the sentinel
/// acting as the end position. Nodes live in an arena owned by the sequence and are addressed by
/// index, removed nodes are recycled by later insertions.
///
/// The arena never shrinks: removed nodes are kept on a free list until reused, and memory is only
/// released by [`clear`](LinkedSequence::clear) or by dropping the sequence.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedSequence.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `first/last` | `O(1)` |
/// | `next/prev` | `O(1)` |
/// | `read/write` | `O(1)` |
/// | `insert_at` | `O(1)` |
/// | `remove_at` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// # Examples
/// ```
/// # use positional_collections::collections::linked::LinkedSequence;
/// # use positional_collections::collections::traits::PositionalSequence;
/// let mut seq = LinkedSequence::new();
/// let ten = seq.push_front(10);
/// assert_eq!(seq.first(), ten);
/// assert_eq!(seq.last(), Ok(ten));
/// assert_eq!(seq.read(ten), Ok(&10));
/// ```
pub struct LinkedSequence<T> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) free: Vec<usize>,
    pub(crate) len: usize,
}

impl<T> LinkedSequence<T> {
    /// Creates a new LinkedSequence with no elements.
    pub fn new() -> LinkedSequence<T> {
        LinkedSequence {
            nodes: vec![Node::sentinel()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Removes all elements, releasing every node except the sentinel.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[SENTINEL] = Node::sentinel();
        self.free.clear();
        self.len = 0;
    }
}

impl<T> LinkedSequence<T> {
    /// Returns the arena index of `pos`, if it refers to an element.
    pub(crate) fn check_element(&self, pos: Link) -> Result<usize, InvalidPosition> {
        match self.nodes.get(pos.0) {
            Some(Node { value: Some(_), .. }) => Ok(pos.0),
            _ => Err(InvalidPosition),
        }
    }

    /// Returns the arena index of `pos`, if it refers to an element or the sentinel.
    pub(crate) fn check_insert(&self, pos: Link) -> Result<usize, InvalidPosition> {
        if pos.0 == SENTINEL {
            Ok(SENTINEL)
        } else {
            self.check_element(pos)
        }
    }

    /// Stores `node` in the arena, reusing a freed slot if there is one.
    pub(crate) fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            },
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            },
        }
    }

    /// Checks that following `next` from the sentinel visits `len` nodes before returning to it and
    /// that every `prev` mirrors the corresponding `next`.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut curr = SENTINEL;
        let mut count = 0;
        loop {
            let next = self.nodes[curr].next;
            assert_eq!(self.nodes[next].prev, curr, "prev should mirror next.");
            if next == SENTINEL {
                break;
            }
            assert!(self.nodes[next].value.is_some(), "Linked nodes should hold values.");
            count += 1;
            curr = next;
        }
        assert_eq!(count, self.len, "The chain should contain len nodes.");
    }
}

impl<T> PositionalSequence for LinkedSequence<T> {
    type Element = T;

    type Position = Link;

    fn len(&self) -> usize {
        self.len
    }

    fn first(&self) -> Link {
        Link(self.nodes[SENTINEL].next)
    }

    fn last(&self) -> Result<Link, EmptyCollection> {
        match self.len {
            0 => Err(EmptyCollection),
            _ => Ok(Link(self.nodes[SENTINEL].prev)),
        }
    }

    fn end(&self) -> Link {
        Link(SENTINEL)
    }

    fn is_end(&self, pos: Link) -> bool {
        pos.0 == SENTINEL
    }

    fn next(&self, pos: Link) -> Result<Link, InvalidPosition> {
        let index = self.check_element(pos)?;
        Ok(Link(self.nodes[index].next))
    }

    fn prev(&self, pos: Link) -> Result<Link, InvalidPosition> {
        let index = self.check_insert(pos)?;
        // Nothing precedes the first element. For an empty sequence, this is the sentinel itself.
        if index == self.nodes[SENTINEL].next {
            return Err(InvalidPosition);
        }
        Ok(Link(self.nodes[index].prev))
    }

    fn read(&self, pos: Link) -> Result<&T, InvalidPosition> {
        let index = self.check_element(pos)?;
        self.nodes[index].value.as_ref().ok_or(InvalidPosition)
    }

    fn read_mut(&mut self, pos: Link) -> Result<&mut T, InvalidPosition> {
        let index = self.check_element(pos)?;
        self.nodes[index].value.as_mut().ok_or(InvalidPosition)
    }

    fn insert_at(&mut self, value: T, pos: Link) -> Result<Link, InvalidPosition> {
        let next = self.check_insert(pos)?;
        let prev = self.nodes[next].prev;

        let node = self.alloc(Node {
            value: Some(value),
            prev,
            next,
        });
        self.nodes[prev].next = node;
        self.nodes[next].prev = node;
        self.len += 1;

        Ok(Link(node))
    }

    fn remove_at(&mut self, pos: Link) -> Result<(T, Link), InvalidPosition> {
        let index = self.check_element(pos)?;

        let node = &mut self.nodes[index];
        let value = node.value.take().ok_or(InvalidPosition)?;
        let (prev, next) = (node.prev, node.next);

        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free.push(index);
        self.len -= 1;

        Ok((value, Link(next)))
    }

    fn swap(&mut self, a: Link, b: Link) -> Result<(), InvalidPosition> {
        let a = self.check_element(a)?;
        let b = self.check_element(b)?;

        if a != b {
            let a_value = self.nodes[a].value.take();
            let b_value = mem::replace(&mut self.nodes[b].value, a_value);
            self.nodes[a].value = b_value;
        }
        Ok(())
    }
}

impl<T> Index<Link> for LinkedSequence<T> {
    type Output = T;

    /// Returns a reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` doesn't refer to an element.
    fn index(&self, pos: Link) -> &Self::Output {
        self.read(pos).throw()
    }
}

impl<T> IndexMut<Link> for LinkedSequence<T> {
    fn index_mut(&mut self, pos: Link) -> &mut Self::Output {
        self.read_mut(pos).throw()
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = LinkedSequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    /// Builds an independent chain by pushing copies of each element to the back. Positions of
    /// the original don't carry over to the copy.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: Debug> Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedSequence")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for LinkedSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.iter())
    }
}
