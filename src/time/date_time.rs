use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use super::calendar::{try_compose_from_fields, try_decompose};
use super::error::{FieldError, UndefinedInstantError};
use super::zone::{TimeZone, UtcOffset, try_calculate_offset};
use super::{CalendarFields, Duration, Instant, Weekday};
use crate::util::result::ResultExtension;

/// An [`Instant`] viewed through an optional, borrowed [`TimeZone`].
///
/// The zone only affects how the instant is broken into calendar fields and how it is formatted.
/// Equality, hashing and ordering all ignore it: two DateTimes with different zones but the same
/// instant are equal.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `new` | `O(1)`* |
/// | `fields` | `O(1)`* |
/// | `offset` | `O(1)`* |
///
/// \* Each of these may consult the zone's DST rule for one year, which is a constant amount of
/// calendar arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct DateTime<'z> {
    instant: Instant,
    zone: Option<&'z TimeZone>,
}

impl<'z> DateTime<'z> {
    /// Creates a DateTime from calendar fields, which are local time in `zone` if one is
    /// provided and UTC otherwise.
    ///
    /// # Panics
    /// Panics if any field is out of range.
    pub fn new(fields: &CalendarFields, zone: Option<&'z TimeZone>) -> DateTime<'z> {
        DateTime::try_new(fields, zone).throw()
    }

    /// Creates a DateTime from calendar fields, or returns an [`Err`] if any field is out of
    /// range. Dates outside the range of [`Instant`] saturate.
    pub fn try_new(
        fields: &CalendarFields,
        zone: Option<&'z TimeZone>,
    ) -> Result<DateTime<'z>, FieldError> {
        Ok(DateTime {
            instant: try_compose_from_fields(fields, zone)?,
            zone,
        })
    }

    pub const fn from_instant(instant: Instant, zone: Option<&'z TimeZone>) -> DateTime<'z> {
        DateTime {
            instant,
            zone,
        }
    }

    pub fn now(zone: Option<&'z TimeZone>) -> DateTime<'z> {
        DateTime::from_instant(Instant::now(), zone)
    }

    pub const fn instant(&self) -> Instant {
        self.instant
    }

    pub const fn zone(&self) -> Option<&'z TimeZone> {
        self.zone
    }

    pub const fn is_undefined(&self) -> bool {
        self.instant.is_undefined()
    }

    /// Returns the same instant, viewed through a different zone.
    pub const fn with_zone<'y>(&self, zone: Option<&'y TimeZone>) -> DateTime<'y> {
        DateTime::from_instant(self.instant, zone)
    }

    /// Returns the local calendar fields of this DateTime.
    ///
    /// # Panics
    /// Panics if the instant is undefined.
    pub fn fields(&self) -> CalendarFields {
        self.try_fields().throw()
    }

    pub fn try_fields(&self) -> Result<CalendarFields, UndefinedInstantError> {
        try_decompose(self.instant, self.zone)
    }

    /// Returns the total offset from UTC at this instant, which is always [`UtcOffset::UTC`]
    /// without a zone.
    ///
    /// # Panics
    /// Panics if the instant is undefined.
    pub fn offset(&self) -> UtcOffset {
        self.try_offset().throw()
    }

    pub fn try_offset(&self) -> Result<UtcOffset, UndefinedInstantError> {
        match self.zone {
            Some(zone) => try_calculate_offset(self.instant, zone),
            None if self.instant.is_undefined() => Err(UndefinedInstantError),
            None => Ok(UtcOffset::UTC),
        }
    }

    pub fn year(&self) -> i32 {
        self.fields().year
    }

    pub fn month(&self) -> u8 {
        self.fields().month
    }

    pub fn day(&self) -> u8 {
        self.fields().day
    }

    pub fn hour(&self) -> u8 {
        self.fields().hour
    }

    pub fn minute(&self) -> u8 {
        self.fields().minute
    }

    pub fn second(&self) -> u8 {
        self.fields().second
    }

    pub fn millisecond(&self) -> u16 {
        self.fields().millisecond
    }

    pub fn microsecond(&self) -> u16 {
        self.fields().microsecond
    }

    pub fn hundred_nanos(&self) -> u8 {
        self.fields().hundred_nanos
    }

    pub fn weekday(&self) -> Weekday {
        self.fields().weekday()
    }

    pub fn day_of_year(&self) -> u16 {
        self.fields().day_of_year()
    }
}

impl PartialEq for DateTime<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for DateTime<'_> {}

impl Hash for DateTime<'_> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.instant.hash(state);
    }
}

impl PartialOrd for DateTime<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// # Panics
/// Panics if either instant is undefined.
impl Ord for DateTime<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl<'z> Add<Duration> for DateTime<'z> {
    type Output = DateTime<'z>;

    fn add(self, rhs: Duration) -> Self::Output {
        DateTime::from_instant(self.instant + rhs, self.zone)
    }
}

impl<'z> Sub<Duration> for DateTime<'z> {
    type Output = DateTime<'z>;

    fn sub(self, rhs: Duration) -> Self::Output {
        DateTime::from_instant(self.instant - rhs, self.zone)
    }
}

impl Sub for DateTime<'_> {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        self.instant - rhs.instant
    }
}

impl From<Instant> for DateTime<'_> {
    fn from(value: Instant) -> Self {
        DateTime::from_instant(value, None)
    }
}
