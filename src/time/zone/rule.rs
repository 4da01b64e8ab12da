use std::fmt::Debug;

use derive_more::IsVariant;

use super::UtcOffset;
use crate::time::calendar::{days_in_month, day_of_week, fields_to_ticks};
use crate::time::{CalendarFields, Duration, Instant, Weekday};

/// The yearly daylight saving schedule of a time zone.
///
/// This is the seam to a zone rule provider: the resolver only asks a rule for its DST delta and
/// for the UTC instants that DST starts and ends in a given year. If the start comes after the
/// end, the rule is treated as a southern hemisphere rule, where DST spans the new year.
pub trait DstRule: Debug + Send + Sync {
    /// The offset added to the base offset while DST is active.
    fn delta(&self) -> UtcOffset;

    /// The UTC instant DST starts in `year`, for a zone with the given base offset.
    fn start_in_year(&self, year: i32, base: UtcOffset) -> Instant;

    /// The UTC instant DST ends in `year`, for a zone with the given base offset.
    fn end_in_year(&self, year: i32, base: UtcOffset) -> Instant;
}

/// Which occurrence of a weekday within a month a transition happens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum WeekOfMonth {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// The clock that a transition's time of day is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum TransitionClock {
    /// UTC, the way EU rules are written.
    Utc,
    /// Local standard time, ignoring DST.
    Standard,
    /// Local wall clock time, which includes DST if it is in effect just before the transition.
    Wall,
}

/// A transition on a given occurrence of a weekday in a month, at a given time of day, such as
/// "the last Sunday of March at 01:00 UTC".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionRule {
    pub month: u8,
    pub week: WeekOfMonth,
    pub weekday: Weekday,
    pub time: Duration,
    pub clock: TransitionClock,
}

impl TransitionRule {
    pub const fn new(
        month: u8,
        week: WeekOfMonth,
        weekday: Weekday,
        time: Duration,
        clock: TransitionClock,
    ) -> TransitionRule {
        TransitionRule {
            month,
            week,
            weekday,
            time,
            clock,
        }
    }

    /// Returns the day of the month this transition falls on in `year`.
    ///
    /// # Panics
    /// Panics if the rule's month is out of range.
    pub fn day_in_year(&self, year: i32) -> u8 {
        let first = day_of_week(year, self.month, 1);
        let first_match = 1 + (7 + self.weekday.days_from_monday() - first.days_from_monday()) % 7;

        let occurrence = match self.week {
            WeekOfMonth::First => 0,
            WeekOfMonth::Second => 1,
            WeekOfMonth::Third => 2,
            WeekOfMonth::Fourth => 3,
            WeekOfMonth::Last => {
                let length = days_in_month(self.month, year);
                return first_match + (length - first_match) / 7 * 7;
            },
        };
        first_match + occurrence * 7
    }

    /// Returns the UTC instant of this transition in `year`. `wall_offset` is the total offset
    /// in effect just before the transition, which is only read for [`TransitionClock::Wall`].
    pub fn instant_in_year(&self, year: i32, base: UtcOffset, wall_offset: UtcOffset) -> Instant {
        let date = CalendarFields::date(year, self.month, self.day_in_year(year));
        let local = fields_to_ticks(&date) + self.time.0 as i128;
        let utc = match self.clock {
            TransitionClock::Utc => local,
            TransitionClock::Standard => local - base.ticks(),
            TransitionClock::Wall => local - wall_offset.ticks(),
        };
        Instant::saturating_from_offset(utc, "transition_rule")
    }
}

/// A DST schedule that starts and ends on the same [`TransitionRule`]s every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnualDstRule {
    pub delta: UtcOffset,
    pub start: TransitionRule,
    pub end: TransitionRule,
}

impl AnnualDstRule {
    pub const fn new(
        delta: UtcOffset,
        start: TransitionRule,
        end: TransitionRule,
    ) -> AnnualDstRule {
        AnnualDstRule {
            delta,
            start,
            end,
        }
    }
}

impl DstRule for AnnualDstRule {
    fn delta(&self) -> UtcOffset {
        self.delta
    }

    fn start_in_year(&self, year: i32, base: UtcOffset) -> Instant {
        self.start.instant_in_year(year, base, base)
    }

    fn end_in_year(&self, year: i32, base: UtcOffset) -> Instant {
        self.end.instant_in_year(year, base, base + self.delta)
    }
}
