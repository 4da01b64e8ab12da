//! Capability traits shared between collections.

pub mod comparator;

#[doc(inline)]
pub use comparator::{Comparator, NaturalOrder};
