//! Hash-based dictionaries, [`ClosedHashDictionary`] and [`OpenHashDictionary`], along with the
//! errors they produce and the [`RollingState`] hasher they use by default.
//!
//! Both dictionaries implement the shared [`Dictionary`](crate::collections::traits::Dictionary)
//! contract and are also re-exported under this module.

pub mod closed;
mod error;
pub mod open;
mod rolling;

pub use closed::ClosedHashDictionary;
pub use error::*;
pub use open::OpenHashDictionary;
pub use rolling::*;

/// The number of slots (closed) or buckets (open) used by the `new` constructors.
pub const DEFAULT_CAP: usize = 20;

pub(crate) const MIN_CAP: usize = 1;
