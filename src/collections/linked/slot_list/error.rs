use derive_more::{Display, Error};

/// A [`SlotPosition`](super::SlotPosition) was used after its slot was removed, or was never
/// issued by the list it was used with.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("slot position is vacant or belongs to another list")]
pub struct InvalidPositionError;
