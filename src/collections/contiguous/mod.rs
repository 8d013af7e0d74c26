//! Contiguous collection types. Namely [`ArraySequence`], a positional sequence over a growable
//! buffer.
#![warn(missing_docs)]

mod array_sequence;
mod iter;

pub use array_sequence::*;
pub use iter::*;
