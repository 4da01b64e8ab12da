//! A module containing [`SlotList`] and associated types.
//!
//! The only other types are [`SlotPosition`], the stable token naming a slot, and the iterators
//! over values or positions.

mod error;
mod iter;
mod slot_list;
mod tests;

pub use error::*;
pub use iter::*;
pub use slot_list::*;
