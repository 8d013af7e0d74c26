//! Abstract interfaces shared by the collections in this crate, and the algorithms written once
//! against them.

mod algorithms;
mod dictionary;
mod sequence;

pub use algorithms::*;
pub use dictionary::*;
pub use sequence::*;
