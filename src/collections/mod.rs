//! General-purpose collection types.
//!
//! # Purpose
//! The centrepiece is [`HashMap`](hash::HashMap), a separate-chaining hash table whose buckets all
//! share one [`SlotList`](linked::SlotList). The other modules hold what it is built from: the
//! list itself, the capabilities it is parameterised over and the pair type it stores.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
pub mod pair;
#[cfg(feature = "traits")]
pub mod traits;

#[doc(inline)]
pub use pair::KeyValuePair;
