//! Various positional collection types, along with the traits that they share.
//!
//! # Method
//! The abstract interfaces live in [`traits`]. Each of the other modules holds one family of
//! realizations and is free to add inherent functionality on top, such as
//! [`ArraySequence::cap`](contiguous::ArraySequence::cap).

pub mod contiguous;
pub mod hash;
pub mod linked;
pub mod ordered;
pub mod traits;
