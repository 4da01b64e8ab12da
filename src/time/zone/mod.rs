pub mod offset;
#[cfg(feature = "tz")]
pub mod registry;
pub mod resolver;
pub mod rule;
pub mod time_zone;

pub use offset::UtcOffset;
#[cfg(feature = "tz")]
pub use registry::{TimeZoneRegistry, UnknownTimeZoneError};
pub use resolver::{calculate_offset, is_dst_active, try_calculate_offset, try_is_dst_active};
pub use rule::{AnnualDstRule, DstRule, TransitionClock, TransitionRule, WeekOfMonth};
pub use time_zone::TimeZone;

mod tests;
