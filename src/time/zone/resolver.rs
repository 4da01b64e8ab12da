//! Resolution of the total UTC offset of a [`TimeZone`] at a given instant.

use std::ops::RangeInclusive;

use super::{TimeZone, UtcOffset};
use crate::time::calendar::ticks_to_fields;
use crate::time::error::UndefinedInstantError;
use crate::time::Instant;
use crate::util::result::ResultExtension;

/// The UTC years in which DST is applied at all. Outside of these, every zone is on its base
/// offset.
pub const DST_YEARS: RangeInclusive<i32> = 1916..=9999;

/// Returns the total offset of `zone` from UTC at `instant`: its base offset, plus its DST delta
/// if DST is active.
///
/// # Panics
/// Panics if `instant` is undefined.
pub fn calculate_offset(instant: Instant, zone: &TimeZone) -> UtcOffset {
    try_calculate_offset(instant, zone).throw()
}

/// Returns the total offset of `zone` from UTC at `instant`, or an [`Err`] if `instant` is
/// undefined.
pub fn try_calculate_offset(
    instant: Instant,
    zone: &TimeZone,
) -> Result<UtcOffset, UndefinedInstantError> {
    let base = zone.base_offset();
    match zone.dst_rule() {
        Some(rule) if try_is_dst_active(instant, zone)? => Ok(base + rule.delta()),
        _ => Ok(base),
    }
}

/// Returns true if DST is active in `zone` at `instant`.
///
/// DST is active from the start of the UTC year's DST window inclusive, to its end exclusive. If
/// the window starts after it ends, DST is active outside of the gap between them instead.
///
/// # Panics
/// Panics if `instant` is undefined.
pub fn is_dst_active(instant: Instant, zone: &TimeZone) -> bool {
    try_is_dst_active(instant, zone).throw()
}

/// Returns true if DST is active in `zone` at `instant`, or an [`Err`] if `instant` is undefined.
pub fn try_is_dst_active(instant: Instant, zone: &TimeZone) -> Result<bool, UndefinedInstantError> {
    let offset = instant.try_offset()?;
    let Some(rule) = zone.dst_rule() else {
        return Ok(false);
    };

    let year = ticks_to_fields(offset).year;
    if !DST_YEARS.contains(&year) {
        return Ok(false);
    }

    let start = rule.start_in_year(year, zone.base_offset()).raw();
    let end = rule.end_in_year(year, zone.base_offset()).raw();
    let raw = instant.raw();

    Ok(if start <= end {
        start <= raw && raw < end
    } else {
        raw >= start || raw < end
    })
}

/// Converts a local tick offset in `zone` to a UTC tick offset.
///
/// Local times skipped by the start of DST resolve as standard time, and local times repeated by
/// its end resolve to the earlier, DST, instant.
pub(crate) fn local_to_utc(local: i128, zone: &TimeZone) -> i128 {
    let standard = local - zone.base_offset().ticks();
    let Some(rule) = zone.dst_rule() else {
        return standard;
    };

    let daylight = standard - rule.delta().ticks();
    let candidate = Instant::saturating_from_offset(daylight, "local_to_utc");
    match try_is_dst_active(candidate, zone) {
        Ok(true) => daylight,
        _ => standard,
    }
}
