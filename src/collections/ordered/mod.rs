//! Sorted collection types. Currently only [`OrderedSequence`], a sequence that keeps its elements
//! in non-decreasing order.

mod ordered_sequence;

pub use ordered_sequence::*;
