//! A module containing [`HashMap`] and associated types.
//!
//! Other than the errors, the included types are for iteration, providing owned and borrowed
//! iteration over entries, keys or values in a map. Iteration follows the order of the shared
//! slot list, which groups entries by bucket but is otherwise unspecified.
//!
//! As a note, there is no mutable iterator over entries or keys because mutating the keys of a
//! HashMap in place would cause a logic error.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod error;
mod hash_map;
mod iter;

pub use error::*;
pub use hash_map::*;
pub use iter::*;
