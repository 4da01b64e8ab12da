use derive_more::{Display, IsVariant};

use super::calendar::try_days_in_month;
use super::duration::{
    TICKS_PER_HOUR, TICKS_PER_MICROSECOND, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE,
    TICKS_PER_SECOND,
};
use super::error::{CalendarField, FieldError, FieldOutOfRangeError, ZeroYearError};

/// The broken-down calendar representation of an instant, in the proleptic Gregorian calendar.
///
/// Years are never 0: the year before 1 is -1. Nothing stops a CalendarFields from holding an
/// invalid date, [`validate`](CalendarFields::validate) checks every field against its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
    pub microsecond: u16,
    pub hundred_nanos: u8,
}

impl CalendarFields {
    /// Creates CalendarFields for midnight at the start of the given date.
    pub const fn date(year: i32, month: u8, day: u8) -> CalendarFields {
        CalendarFields {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            microsecond: 0,
            hundred_nanos: 0,
        }
    }

    /// Replaces the whole-second time of day, keeping the date and sub-second fields.
    pub const fn with_time(self, hour: u8, minute: u8, second: u8) -> CalendarFields {
        CalendarFields {
            hour,
            minute,
            second,
            ..self
        }
    }

    /// Replaces the sub-second fields.
    pub const fn with_fraction(
        self,
        millisecond: u16,
        microsecond: u16,
        hundred_nanos: u8,
    ) -> CalendarFields {
        CalendarFields {
            millisecond,
            microsecond,
            hundred_nanos,
            ..self
        }
    }

    /// Checks that every field is within its range, with the day checked against the length of
    /// the month in that year.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.year == 0 {
            return Err(ZeroYearError.into());
        }

        let max_day = try_days_in_month(self.month, self.year)?;

        let checks = [
            (CalendarField::Day, self.day as i64, 1..=max_day as i64),
            (CalendarField::Hour, self.hour as i64, 0..=23),
            (CalendarField::Minute, self.minute as i64, 0..=59),
            (CalendarField::Second, self.second as i64, 0..=59),
            (CalendarField::Millisecond, self.millisecond as i64, 0..=999),
            (CalendarField::Microsecond, self.microsecond as i64, 0..=999),
            (CalendarField::HundredNanos, self.hundred_nanos as i64, 0..=9),
        ];

        for (field, value, range) in checks {
            if !range.contains(&value) {
                return Err(FieldOutOfRangeError { field, value }.into());
            }
        }

        Ok(())
    }

    /// The number of ticks elapsed since midnight.
    pub(crate) const fn time_of_day_ticks(&self) -> u64 {
        self.hour as u64 * TICKS_PER_HOUR
            + self.minute as u64 * TICKS_PER_MINUTE
            + self.second as u64 * TICKS_PER_SECOND
            + self.millisecond as u64 * TICKS_PER_MILLISECOND
            + self.microsecond as u64 * TICKS_PER_MICROSECOND
            + self.hundred_nanos as u64
    }

    /// The sub-second part of the time of day, in ticks.
    pub(crate) const fn fraction_ticks(&self) -> u32 {
        self.millisecond as u32 * TICKS_PER_MILLISECOND as u32
            + self.microsecond as u32 * TICKS_PER_MICROSECOND as u32
            + self.hundred_nanos as u32
    }

    /// Returns the day of the week this date falls on.
    ///
    /// # Panics
    /// Panics if the month is out of range.
    pub fn weekday(&self) -> Weekday {
        super::calendar::day_of_week(self.year, self.month, self.day)
    }

    /// Returns the 1-based ordinal of this date within its year.
    ///
    /// # Panics
    /// Panics if the month is out of range.
    pub fn day_of_year(&self) -> u16 {
        super::calendar::day_of_year(self.year, self.month, self.day)
    }
}

impl Default for CalendarFields {
    /// Midnight on 0001-01-01.
    fn default() -> Self {
        CalendarFields::date(1, 1, 1)
    }
}

/// A day of the week. 0001-01-01 is a Monday in the proleptic Gregorian calendar.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the number of days since the most recent Monday, so Monday is 0 and Sunday is 6.
    pub const fn days_from_monday(self) -> u8 {
        self as u8
    }

    /// The inverse of [`days_from_monday`](Weekday::days_from_monday), wrapping every 7 days.
    pub const fn from_days_from_monday(days: i64) -> Weekday {
        Weekday::ALL[days.rem_euclid(7) as usize]
    }

    pub const fn succ(self) -> Weekday {
        Weekday::from_days_from_monday(self as i64 + 1)
    }

    pub const fn pred(self) -> Weekday {
        Weekday::from_days_from_monday(self as i64 - 1)
    }
}
