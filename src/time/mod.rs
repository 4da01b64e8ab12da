//! A proleptic Gregorian calendar over 100ns ticks, with time zone and DST support.
//!
//! [`Instant`] is the raw point in time, [`CalendarFields`] its broken-down form, and the
//! functions in [`calendar`] convert between the two. [`DateTime`] pairs an instant with a
//! borrowed [`TimeZone`](zone::TimeZone) for display and field access.

pub mod calendar;
mod date_time;
pub mod duration;
pub mod error;
pub mod fields;
mod format;
pub mod instant;
pub mod zone;

pub use calendar::{
    compose_from_fields, days_in_month, days_in_year, decompose, is_leap_year,
    try_compose_from_fields, try_days_in_month, try_decompose,
};
pub use date_time::DateTime;
pub use duration::Duration;
pub use error::{
    CalendarField, FieldError, FieldOutOfRangeError, MalformedTimestampError, ParseError,
    UndefinedInstantError, ZeroYearError,
};
pub use fields::{CalendarFields, Weekday};
pub use instant::Instant;

mod tests;
