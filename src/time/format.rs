//! The ISO-8601 extended timestamp format, `±YYYY-MM-DDThh:mm:ss[.fffffff](Z|±hh:mm)`.
//!
//! Years are zero-padded to at least 4 digits and only negative years carry a sign when
//! formatted, although a leading `+` is accepted when parsing. The fraction is trimmed of
//! trailing zeros and omitted entirely when zero.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::calendar::fields_to_ticks;
use super::duration::{
    TICKS_PER_HOUR, TICKS_PER_MICROSECOND, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE,
    write_fraction,
};
use super::error::{CalendarField, FieldOutOfRangeError, MalformedTimestampError, ParseError};
use super::zone::{TimeZone, UtcOffset};
use super::{CalendarFields, DateTime, Duration, Instant};

impl Display for DateTime<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (Ok(fields), Ok(offset)) = (self.try_fields(), self.try_offset()) else {
            return f.write_str("undefined");
        };

        if fields.year < 0 {
            f.write_str("-")?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            fields.year.unsigned_abs(),
            fields.month,
            fields.day,
            fields.hour,
            fields.minute,
            fields.second,
        )?;
        write_fraction(f, fields.fraction_ticks())?;

        match self.zone() {
            None => f.write_str("Z"),
            Some(_) => write!(f, "{offset}"),
        }
    }
}

/// Formats in UTC, with a `Z` suffix.
impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        DateTime::from_instant(*self, None).fmt(f)
    }
}

impl<'z> DateTime<'z> {
    /// Parses a timestamp and attaches `zone` to the result. The timestamp's own offset (or `Z`)
    /// determines the instant, the zone only determines how it's viewed afterwards.
    pub fn parse(text: &str, zone: Option<&'z TimeZone>) -> Result<DateTime<'z>, ParseError> {
        let (fields, offset) = Scanner::new(text).timestamp()?;
        fields.validate()?;

        let utc = fields_to_ticks(&fields) - offset.ticks();
        Ok(DateTime::from_instant(Instant::saturating_from_offset(utc, "parse"), zone))
    }
}

impl FromStr for Instant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DateTime::parse(s, None)?.instant())
    }
}

const MAX_YEAR_DIGITS: usize = 10;
const FRACTION_DIGITS: usize = 7;

struct Scanner<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Scanner<'a> {
        Scanner {
            bytes: text.as_bytes(),
            position: 0,
        }
    }

    fn malformed(&self) -> MalformedTimestampError {
        MalformedTimestampError {
            position: self.position,
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        let matched = self.bytes.get(self.position) == Some(&byte);
        if matched {
            self.position += 1;
        }
        matched
    }

    fn expect(&mut self, byte: u8) -> Result<(), MalformedTimestampError> {
        if self.eat(byte) { Ok(()) } else { Err(self.malformed()) }
    }

    /// Reads between `min` and `max` decimal digits, returning their value and how many there
    /// were.
    fn digits(&mut self, min: usize, max: usize) -> Result<(u64, usize), MalformedTimestampError> {
        let start = self.position;
        let mut value = 0_u64;
        while self.position - start < max
            && let Some(digit @ b'0'..=b'9') = self.bytes.get(self.position)
        {
            value = value * 10 + (digit - b'0') as u64;
            self.position += 1;
        }

        let count = self.position - start;
        if count < min { Err(self.malformed()) } else { Ok((value, count)) }
    }

    fn two_digits(&mut self) -> Result<u8, MalformedTimestampError> {
        Ok(self.digits(2, 2)?.0 as u8)
    }

    fn timestamp(mut self) -> Result<(CalendarFields, UtcOffset), ParseError> {
        let negative = self.eat(b'-');
        if !negative {
            self.eat(b'+');
        }

        // At most 10 digits, so this always fits.
        let magnitude = self.digits(4, MAX_YEAR_DIGITS)?.0 as i64;
        let year = if negative { -magnitude } else { magnitude };
        let year = i32::try_from(year).map_err(|_| FieldOutOfRangeError {
            field: CalendarField::Year,
            value: year,
        })?;

        self.expect(b'-')?;
        let month = self.two_digits()?;
        self.expect(b'-')?;
        let day = self.two_digits()?;
        self.expect(b'T')?;
        let hour = self.two_digits()?;
        self.expect(b':')?;
        let minute = self.two_digits()?;
        self.expect(b':')?;
        let second = self.two_digits()?;

        let mut fraction = 0;
        if self.eat(b'.') {
            let (value, count) = self.digits(1, FRACTION_DIGITS)?;
            fraction = value * 10_u64.pow((FRACTION_DIGITS - count) as u32);
        }

        let offset = self.offset()?;
        if self.position != self.bytes.len() {
            return Err(self.malformed().into());
        }

        let fields = CalendarFields::date(year, month, day)
            .with_time(hour, minute, second)
            .with_fraction(
                (fraction / TICKS_PER_MILLISECOND) as u16,
                (fraction % TICKS_PER_MILLISECOND / TICKS_PER_MICROSECOND) as u16,
                (fraction % TICKS_PER_MICROSECOND) as u8,
            );
        Ok((fields, offset))
    }

    fn offset(&mut self) -> Result<UtcOffset, ParseError> {
        if self.eat(b'Z') {
            return Ok(UtcOffset::UTC);
        }

        let negative = match self.bytes.get(self.position) {
            Some(b'+') => false,
            Some(b'-') => true,
            _ => return Err(self.malformed().into()),
        };
        self.position += 1;

        let hours = self.two_digits()?;
        self.expect(b':')?;
        let minutes = self.two_digits()?;
        if minutes >= 60 {
            return Err(FieldOutOfRangeError {
                field: CalendarField::Minute,
                value: minutes as i64,
            }
            .into());
        }

        let magnitude = hours as u64 * TICKS_PER_HOUR + minutes as u64 * TICKS_PER_MINUTE;
        Ok(UtcOffset::new(negative, Duration::from_ticks(magnitude)))
    }
}
