use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::time::SystemTime;

use tracing::warn;

use super::duration::TICKS_PER_DAY;
use super::error::UndefinedInstantError;
use super::Duration;
use crate::util::result::ResultExtension;

/// The raw value of the first instant of year 1.
const HALF: u64 = 1 << 63;

/// A point in time, as a raw count of 100ns ticks.
///
/// The raw value `2^63` is midnight UTC at the start of 0001-01-01 ([`Instant::EPOCH`]), and every
/// raw value below that belongs to a negative year. The raw value 0 is reserved for
/// [`Instant::UNDEFINED`], so the representable range runs from [`Instant::MIN`]
/// (`-29228-04-18T21:11:54.5224193Z`) to [`Instant::MAX`] (`29228-09-14T02:48:05.4775807Z`).
///
/// Arithmetic with a [`Duration`] saturates at MIN and MAX. Equality and hashing compare raw
/// ticks and work on undefined instants, but ordering and arithmetic on an undefined instant
/// panic, use the `try_*` and `checked_*` methods to handle that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instant(u64);

impl Instant {
    pub const UNDEFINED: Instant = Instant(0);
    pub const MIN: Instant = Instant(1);
    pub const MAX: Instant = Instant(u64::MAX);
    /// 0001-01-01T00:00:00Z
    pub const EPOCH: Instant = Instant(HALF);
    /// 1970-01-01T00:00:00Z
    pub const UNIX_EPOCH: Instant = Instant(HALF + 719_162 * TICKS_PER_DAY);

    pub const fn from_raw(raw: u64) -> Instant {
        Instant(raw)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }

    pub const fn is_undefined(&self) -> bool {
        self.0 == Instant::UNDEFINED.0
    }

    /// Returns the current time, according to the system clock.
    pub fn now() -> Instant {
        match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
            Ok(since) => Instant::UNIX_EPOCH + Duration::from(since),
            Err(before) => Instant::UNIX_EPOCH - Duration::from(before.duration()),
        }
    }

    /// Returns the signed tick offset of this instant from [`Instant::EPOCH`].
    pub(crate) fn try_offset(&self) -> Result<i128, UndefinedInstantError> {
        if self.is_undefined() {
            return Err(UndefinedInstantError);
        }
        Ok(self.0 as i128 - HALF as i128)
    }

    /// Creates an instant from a signed tick offset from [`Instant::EPOCH`], saturating to MIN or
    /// MAX if the offset is out of range. `operation` names the caller in the warning.
    pub(crate) fn saturating_from_offset(offset: i128, operation: &'static str) -> Instant {
        let raw = offset + HALF as i128;
        if raw < Instant::MIN.0 as i128 {
            warn!(operation, "instant below the representable range, saturating to MIN");
            Instant::MIN
        } else if raw > Instant::MAX.0 as i128 {
            warn!(operation, "instant above the representable range, saturating to MAX");
            Instant::MAX
        } else {
            Instant(raw as u64)
        }
    }

    /// Adds `duration`, returning None if the result is out of range or this instant is
    /// undefined.
    pub const fn checked_add(self, duration: Duration) -> Option<Instant> {
        if self.is_undefined() {
            return None;
        }
        match self.0.checked_add(duration.0) {
            Some(raw) => Some(Instant(raw)),
            None => None,
        }
    }

    /// Subtracts `duration`, returning None if the result is out of range or this instant is
    /// undefined.
    pub const fn checked_sub(self, duration: Duration) -> Option<Instant> {
        if self.is_undefined() {
            return None;
        }
        match self.0.checked_sub(duration.0) {
            Some(raw) if raw >= Instant::MIN.0 => Some(Instant(raw)),
            _ => None,
        }
    }

    /// Adds `duration`, saturating at [`Instant::MAX`], or returns an [`Err`] if this instant is
    /// undefined.
    pub fn try_add(self, duration: Duration) -> Result<Instant, UndefinedInstantError> {
        let offset = self.try_offset()?;
        Ok(Instant::saturating_from_offset(offset + duration.0 as i128, "add"))
    }

    /// Subtracts `duration`, saturating at [`Instant::MIN`], or returns an [`Err`] if this
    /// instant is undefined.
    pub fn try_sub(self, duration: Duration) -> Result<Instant, UndefinedInstantError> {
        let offset = self.try_offset()?;
        Ok(Instant::saturating_from_offset(offset - duration.0 as i128, "sub"))
    }

    /// Returns the absolute time between two instants, or an [`Err`] if either is undefined.
    pub fn try_abs_diff(self, other: Instant) -> Result<Duration, UndefinedInstantError> {
        if self.is_undefined() || other.is_undefined() {
            return Err(UndefinedInstantError);
        }
        Ok(Duration(self.0.abs_diff(other.0)))
    }

    /// Compares two instants by their raw ticks, or returns an [`Err`] if either is undefined.
    pub fn try_cmp(&self, other: &Instant) -> Result<Ordering, UndefinedInstantError> {
        if self.is_undefined() || other.is_undefined() {
            return Err(UndefinedInstantError);
        }
        Ok(self.0.cmp(&other.0))
    }
}

impl Default for Instant {
    fn default() -> Self {
        Instant::UNDEFINED
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// # Panics
/// Panics if either instant is undefined.
impl Ord for Instant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.try_cmp(other).throw()
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: Duration) -> Self::Output {
        self.try_add(rhs).throw()
    }
}

impl AddAssign<Duration> for Instant {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl Sub<Duration> for Instant {
    type Output = Instant;

    fn sub(self, rhs: Duration) -> Self::Output {
        self.try_sub(rhs).throw()
    }
}

impl SubAssign<Duration> for Instant {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

/// The absolute difference between two instants.
impl Sub for Instant {
    type Output = Duration;

    fn sub(self, rhs: Instant) -> Self::Output {
        self.try_abs_diff(rhs).throw()
    }
}
