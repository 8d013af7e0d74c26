//! Closed hashing (open addressing) with linear probing. See [`ClosedHashDictionary`].

mod closed_hash;
mod iter;
mod tests;

pub use closed_hash::*;
pub use iter::*;
