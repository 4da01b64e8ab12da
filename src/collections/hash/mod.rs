//! Hash-based collections. [`HashMap`] is the only collection at the moment, along with the
//! [`HashProvider`] capability it hashes through and the [`BucketArray`] it indexes with.

pub mod bucket;
pub mod map;
pub mod provider;

#[doc(inline)]
pub use bucket::{Bucket, BucketArray};
#[doc(inline)]
pub use map::HashMap;
#[doc(inline)]
pub use provider::{HashProvider, IdentityHash, StdHash};
