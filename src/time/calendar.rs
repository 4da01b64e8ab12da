//! Conversion between [`Instant`]s and [`CalendarFields`] in the proleptic Gregorian calendar.
//!
//! Internally every conversion works on a signed tick offset from the first instant of year 1
//! (`Instant::EPOCH`), held in an `i128` so that out of range dates can be detected and saturated
//! instead of wrapping. Year 1 starts at offset 0 and grows forwards. Year -1 ends at offset 0,
//! so a negative year `-a` starts `days_in_years(a)` days before the epoch.

use super::duration::{
    TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MICROSECOND, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE,
    TICKS_PER_SECOND,
};
use super::error::{CalendarField, FieldError, FieldOutOfRangeError, UndefinedInstantError};
use super::zone::{TimeZone, resolver};
use super::{CalendarFields, Instant, Weekday};
use crate::util::result::ResultExtension;

const DAY: i128 = TICKS_PER_DAY as i128;

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if `year` is a leap year. Negative years follow the same rule as their absolute
/// value, so -4 and -400 are leap years and -100 is not.
pub const fn is_leap_year(year: i32) -> bool {
    let year = year.unsigned_abs();
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

/// Returns the number of days in `month` (1-12) of `year`.
///
/// # Panics
/// Panics if `month` is out of range.
pub fn days_in_month(month: u8, year: i32) -> u8 {
    try_days_in_month(month, year).throw()
}

/// Returns the number of days in `month` (1-12) of `year`, or an [`Err`] if `month` is out of
/// range.
pub fn try_days_in_month(month: u8, year: i32) -> Result<u8, FieldOutOfRangeError> {
    match month {
        2 if is_leap_year(year) => Ok(29),
        1..=12 => Ok(DAYS_IN_MONTH[month as usize - 1]),
        _ => Err(FieldOutOfRangeError {
            field: CalendarField::Month,
            value: month as i64,
        }),
    }
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the 1-based ordinal of a date within its year.
///
/// # Panics
/// Panics if `month` is out of range.
pub fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    days_before_month(month, year) as u16 + day as u16
}

/// Returns the day of the week a date falls on.
///
/// # Panics
/// Panics if `month` is out of range.
pub fn day_of_week(year: i32, month: u8, day: u8) -> Weekday {
    let days = year_start_day(year) + days_before_month(month, year) + day as i64 - 1;
    Weekday::from_days_from_monday(days)
}

/// The number of days in the first `years` years counted away from the epoch, in either
/// direction, since leap years are symmetric around it.
pub(crate) const fn days_in_years(years: i64) -> i64 {
    years * 365 + years / 4 - years / 100 + years / 400
}

/// Finds the number of whole years `n` that fit in `days`, so that
/// `days_in_years(n) <= days < days_in_years(n + 1)`.
fn years_within(days: i64) -> i64 {
    // 146097 days make up exactly 400 years, so this is at most 1 off.
    let mut years = days * 400 / 146_097;
    while days_in_years(years + 1) <= days {
        years += 1;
    }
    while days_in_years(years) > days {
        years -= 1;
    }
    years
}

/// The day offset of January 1st of `year` from the epoch.
fn year_start_day(year: i32) -> i64 {
    if year > 0 {
        days_in_years(year as i64 - 1)
    } else {
        -days_in_years(-(year as i64))
    }
}

fn days_before_month(month: u8, year: i32) -> i64 {
    try_days_in_month(month, year).throw();
    (1..month).map(|m| days_in_month(m, year) as i64).sum()
}

/// Converts already validated fields to a tick offset from the epoch, with no time zone applied.
pub(crate) fn fields_to_ticks(fields: &CalendarFields) -> i128 {
    let days = year_start_day(fields.year) + days_before_month(fields.month, fields.year)
        + fields.day as i64
        - 1;
    days as i128 * DAY + fields.time_of_day_ticks() as i128
}

/// Converts a tick offset from the epoch to fields, with no time zone applied. Every offset maps
/// to a valid date, including those outside the range of [`Instant`].
pub(crate) fn ticks_to_fields(ticks: i128) -> CalendarFields {
    let (year, mut day_index, time) = if ticks >= 0 {
        let days = (ticks / DAY) as i64;
        let elapsed = years_within(days);
        (elapsed + 1, days - days_in_years(elapsed), ticks % DAY)
    } else {
        let back = -ticks;
        let days_back = ((back + DAY - 1) / DAY) as i64;
        let within = years_within(days_back);
        // The year containing the instant is the first one whose start reaches back past it.
        let elapsed = if days_in_years(within) == days_back { within } else { within + 1 };
        let into_year = days_in_years(elapsed) as i128 * DAY - back;
        (-elapsed, (into_year / DAY) as i64, into_year % DAY)
    };

    // Offsets only come from an Instant, maybe shifted by a zone, so the year is within ±29230.
    let year = year as i32;
    let mut month = 1;
    loop {
        let length = days_in_month(month, year) as i64;
        if day_index < length {
            break;
        }
        day_index -= length;
        month += 1;
    }

    let time = time as u64;
    CalendarFields {
        year,
        month,
        day: day_index as u8 + 1,
        hour: (time / TICKS_PER_HOUR) as u8,
        minute: (time % TICKS_PER_HOUR / TICKS_PER_MINUTE) as u8,
        second: (time % TICKS_PER_MINUTE / TICKS_PER_SECOND) as u8,
        millisecond: (time % TICKS_PER_SECOND / TICKS_PER_MILLISECOND) as u16,
        microsecond: (time % TICKS_PER_MILLISECOND / TICKS_PER_MICROSECOND) as u16,
        hundred_nanos: (time % TICKS_PER_MICROSECOND) as u8,
    }
}

/// Composes calendar fields into an instant. If a time zone is provided, the fields are local
/// time in that zone and the zone's total offset is removed.
///
/// # Panics
/// Panics if any field is out of range.
pub fn compose_from_fields(fields: &CalendarFields, zone: Option<&TimeZone>) -> Instant {
    try_compose_from_fields(fields, zone).throw()
}

/// Composes calendar fields into an instant, or returns an [`Err`] if any field is out of range.
///
/// Dates beyond the range of [`Instant`] aren't errors: they saturate to [`Instant::MIN`] or
/// [`Instant::MAX`] and emit a `warn` event.
pub fn try_compose_from_fields(
    fields: &CalendarFields,
    zone: Option<&TimeZone>,
) -> Result<Instant, FieldError> {
    fields.validate()?;

    let local = fields_to_ticks(fields);
    let utc = match zone {
        Some(zone) => resolver::local_to_utc(local, zone),
        None => local,
    };

    Ok(Instant::saturating_from_offset(utc, "compose_from_fields"))
}

/// Decomposes an instant into calendar fields. If a time zone is provided, the fields are local
/// time in that zone.
///
/// # Panics
/// Panics if `instant` is undefined.
pub fn decompose(instant: Instant, zone: Option<&TimeZone>) -> CalendarFields {
    try_decompose(instant, zone).throw()
}

/// Decomposes an instant into calendar fields, or returns an [`Err`] if `instant` is undefined.
pub fn try_decompose(
    instant: Instant,
    zone: Option<&TimeZone>,
) -> Result<CalendarFields, UndefinedInstantError> {
    let utc = instant.try_offset()?;
    let local = match zone {
        Some(zone) => utc + resolver::try_calculate_offset(instant, zone)?.ticks(),
        None => utc,
    };

    Ok(ticks_to_fields(local))
}
