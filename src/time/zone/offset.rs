use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Neg};

use crate::time::Duration;
use crate::time::duration::{TICKS_PER_HOUR, TICKS_PER_MINUTE};

/// An offset from UTC, stored as a magnitude and a sign.
///
/// A zero offset is never negative, so `+00:00` and `-00:00` compare equal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    magnitude: Duration,
    negative: bool,
}

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset::new(false, Duration::ZERO);

    pub const fn new(negative: bool, magnitude: Duration) -> UtcOffset {
        UtcOffset {
            magnitude,
            negative: negative && !magnitude.is_zero(),
        }
    }

    /// An offset ahead of UTC, such as `+05:30`.
    pub const fn east(hours: u8, minutes: u8) -> UtcOffset {
        UtcOffset::new(false, hours_minutes(hours, minutes))
    }

    /// An offset behind UTC, such as `-03:30`.
    pub const fn west(hours: u8, minutes: u8) -> UtcOffset {
        UtcOffset::new(true, hours_minutes(hours, minutes))
    }

    /// Creates an offset from a signed tick count, saturating the magnitude at [`Duration::MAX`].
    pub fn from_ticks(ticks: i128) -> UtcOffset {
        let magnitude = u64::try_from(ticks.unsigned_abs()).unwrap_or(u64::MAX);
        UtcOffset::new(ticks < 0, Duration(magnitude))
    }

    pub const fn magnitude(&self) -> Duration {
        self.magnitude
    }

    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// The offset as a signed tick count.
    pub const fn ticks(&self) -> i128 {
        if self.negative {
            -(self.magnitude.0 as i128)
        } else {
            self.magnitude.0 as i128
        }
    }
}

const fn hours_minutes(hours: u8, minutes: u8) -> Duration {
    Duration(hours as u64 * TICKS_PER_HOUR + minutes as u64 * TICKS_PER_MINUTE)
}

/// Adds two offsets, each of which may have either sign.
impl Add for UtcOffset {
    type Output = UtcOffset;

    fn add(self, rhs: UtcOffset) -> Self::Output {
        UtcOffset::from_ticks(self.ticks() + rhs.ticks())
    }
}

impl Neg for UtcOffset {
    type Output = UtcOffset;

    fn neg(self) -> Self::Output {
        UtcOffset::new(!self.negative, self.magnitude)
    }
}

/// Formats as `±hh:mm`, the way offsets appear in timestamps. Seconds are dropped.
impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        let minutes = self.magnitude.whole_minutes();
        write!(f, "{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    }
}
