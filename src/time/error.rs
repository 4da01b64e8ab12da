use derive_more::{Display, Error, From, IsVariant};

/// One of the fields of [`CalendarFields`](super::CalendarFields).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarField {
    #[display("year")]
    Year,
    #[display("month")]
    Month,
    #[display("day")]
    Day,
    #[display("hour")]
    Hour,
    #[display("minute")]
    Minute,
    #[display("second")]
    Second,
    #[display("millisecond")]
    Millisecond,
    #[display("microsecond")]
    Microsecond,
    #[display("hundred nanoseconds")]
    HundredNanos,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("{field} {value} is out of range")]
pub struct FieldOutOfRangeError {
    pub field: CalendarField,
    pub value: i64,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("year 0 doesn't exist in the proleptic Gregorian calendar")]
pub struct ZeroYearError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("operation on an undefined instant")]
pub struct UndefinedInstantError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("malformed timestamp at byte {position}")]
pub struct MalformedTimestampError {
    pub position: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum FieldError {
    ZeroYear(ZeroYearError),
    FieldOutOfRange(FieldOutOfRangeError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum ParseError {
    Malformed(MalformedTimestampError),
    ZeroYear(ZeroYearError),
    FieldOutOfRange(FieldOutOfRangeError),
}

impl From<FieldError> for ParseError {
    fn from(value: FieldError) -> Self {
        match value {
            FieldError::ZeroYear(e) => e.into(),
            FieldError::FieldOutOfRange(e) => e.into(),
        }
    }
}
