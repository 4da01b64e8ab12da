use std::fmt::{self, Debug, Formatter};

/// Prints the contained string verbatim from a [`Debug`] context, so that pre-rendered entries
/// can be passed to `debug_list` and friends without being quoted.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
