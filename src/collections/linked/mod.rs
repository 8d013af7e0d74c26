//! Linked collection types. Revolves around [`LinkedSequence`] and the [`Link`] positions used to
//! address its nodes.

mod iter;
mod linked_sequence;
mod node;

pub use iter::*;
pub use linked_sequence::*;
pub use node::Link;
pub(crate) use node::{Node, SENTINEL};
