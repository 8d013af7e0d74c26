//! Open hashing with separate chaining. See [`OpenHashDictionary`].

mod iter;
mod open_hash;
mod tests;

pub use iter::*;
pub use open_hash::*;
