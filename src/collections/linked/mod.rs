//! Linked collection types. Currently this is only [`SlotList`], a doubly linked list whose nodes
//! live in a shared arena and are addressed by stable [`SlotPosition`]s.

pub mod slot_list;

#[doc(inline)]
pub use slot_list::{SlotList, SlotPosition};
