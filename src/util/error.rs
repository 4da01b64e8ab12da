use derive_more::{Display, Error};

/// The slot storage of a collection can't grow any further.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("capacity overflow")]
pub struct CapacityOverflow;
