use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

pub(crate) const TICKS_PER_MICROSECOND: u64 = 10;
pub(crate) const TICKS_PER_MILLISECOND: u64 = TICKS_PER_MICROSECOND * 1_000;
pub(crate) const TICKS_PER_SECOND: u64 = TICKS_PER_MILLISECOND * 1_000;
pub(crate) const TICKS_PER_MINUTE: u64 = TICKS_PER_SECOND * 60;
pub(crate) const TICKS_PER_HOUR: u64 = TICKS_PER_MINUTE * 60;
pub(crate) const TICKS_PER_DAY: u64 = TICKS_PER_HOUR * 24;

/// A non-negative span of time, counted in 100ns ticks.
///
/// Arithmetic on durations saturates at [`Duration::ZERO`] and [`Duration::MAX`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(pub(crate) u64);

impl Duration {
    pub const ZERO: Duration = Duration(0);
    pub const TICK: Duration = Duration(1);
    pub const MICROSECOND: Duration = Duration(TICKS_PER_MICROSECOND);
    pub const MILLISECOND: Duration = Duration(TICKS_PER_MILLISECOND);
    pub const SECOND: Duration = Duration(TICKS_PER_SECOND);
    pub const MINUTE: Duration = Duration(TICKS_PER_MINUTE);
    pub const HOUR: Duration = Duration(TICKS_PER_HOUR);
    pub const DAY: Duration = Duration(TICKS_PER_DAY);
    pub const MAX: Duration = Duration(u64::MAX);

    pub const fn from_ticks(ticks: u64) -> Duration {
        Duration(ticks)
    }

    pub const fn from_micros(micros: u64) -> Duration {
        Duration(micros.saturating_mul(TICKS_PER_MICROSECOND))
    }

    pub const fn from_millis(millis: u64) -> Duration {
        Duration(millis.saturating_mul(TICKS_PER_MILLISECOND))
    }

    pub const fn from_seconds(seconds: u64) -> Duration {
        Duration(seconds.saturating_mul(TICKS_PER_SECOND))
    }

    pub const fn from_minutes(minutes: u64) -> Duration {
        Duration(minutes.saturating_mul(TICKS_PER_MINUTE))
    }

    pub const fn from_hours(hours: u64) -> Duration {
        Duration(hours.saturating_mul(TICKS_PER_HOUR))
    }

    pub const fn from_days(days: u64) -> Duration {
        Duration(days.saturating_mul(TICKS_PER_DAY))
    }

    /// Returns the total number of 100ns ticks in the Duration.
    pub const fn ticks(&self) -> u64 {
        self.0
    }

    pub const fn whole_days(&self) -> u64 {
        self.0 / TICKS_PER_DAY
    }

    pub const fn whole_hours(&self) -> u64 {
        self.0 / TICKS_PER_HOUR
    }

    pub const fn whole_minutes(&self) -> u64 {
        self.0 / TICKS_PER_MINUTE
    }

    pub const fn whole_seconds(&self) -> u64 {
        self.0 / TICKS_PER_SECOND
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn checked_add(self, rhs: Duration) -> Option<Duration> {
        match self.0.checked_add(rhs.0) {
            Some(ticks) => Some(Duration(ticks)),
            None => None,
        }
    }

    pub const fn checked_sub(self, rhs: Duration) -> Option<Duration> {
        match self.0.checked_sub(rhs.0) {
            Some(ticks) => Some(Duration(ticks)),
            None => None,
        }
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Self::Output {
        Duration(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Self::Output {
        Duration(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl Mul<u64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: u64) -> Self::Output {
        Duration(self.0.saturating_mul(rhs))
    }
}

impl From<std::time::Duration> for Duration {
    fn from(value: std::time::Duration) -> Self {
        let ticks = value.as_nanos() / 100;
        Duration(u64::try_from(ticks).unwrap_or(u64::MAX))
    }
}

/// Formats as `[d.]hh:mm:ss[.fffffff]`, trimming trailing zeros from the fraction.
impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let days = self.whole_days();
        if days > 0 {
            write!(f, "{days}.")?;
        }
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.whole_hours() % 24,
            self.whole_minutes() % 60,
            self.whole_seconds() % 60,
        )?;
        write_fraction(f, (self.0 % TICKS_PER_SECOND) as u32)
    }
}

/// Writes a sub-second tick count as `.fffffff` with trailing zeros trimmed, or nothing at all
/// for 0.
pub(crate) fn write_fraction(f: &mut Formatter<'_>, ticks: u32) -> fmt::Result {
    if ticks == 0 { return Ok(()); }

    let digits = format!("{ticks:07}");
    write!(f, ".{}", digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturation() {
        assert_eq!(Duration::MAX + Duration::TICK, Duration::MAX);
        assert_eq!(Duration::ZERO - Duration::TICK, Duration::ZERO);
        assert_eq!(Duration::from_days(u64::MAX), Duration::MAX);
        assert_eq!(Duration::HOUR.checked_sub(Duration::DAY), None);
    }

    #[test]
    fn test_units() {
        assert_eq!(Duration::from_hours(48).whole_days(), 2);
        assert_eq!(Duration::from_millis(1).ticks(), 10_000);
        assert_eq!(Duration::MINUTE * 90, Duration::from_minutes(90));
        assert_eq!(Duration::from(std::time::Duration::from_micros(3)), Duration::from_micros(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Duration::ZERO.to_string(), "00:00:00");
        assert_eq!((Duration::DAY + Duration::from_seconds(3723)).to_string(), "1.01:02:03");
        assert_eq!((Duration::SECOND + Duration::MILLISECOND * 250).to_string(), "00:00:01.25");
        assert_eq!(Duration::TICK.to_string(), "00:00:00.0000001");
    }
}
