#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

const fn max_fields() -> CalendarFields {
    CalendarFields::date(29228, 9, 14).with_time(2, 48, 5).with_fraction(477, 580, 7)
}

const fn min_fields() -> CalendarFields {
    CalendarFields::date(-29228, 4, 18).with_time(21, 11, 54).with_fraction(522, 419, 3)
}

#[test]
fn test_leap_years() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert!(is_leap_year(-4), "Negative years should use their absolute value.");
    assert!(is_leap_year(-400));
    assert!(!is_leap_year(-100));
    assert!(!is_leap_year(-1));

    assert_eq!(days_in_year(2000), 366);
    assert_eq!(days_in_year(-3), 365);
}

#[test]
fn test_days_in_month() {
    assert_eq!(days_in_month(2, 2000), 29);
    assert_eq!(days_in_month(2, 1900), 28);
    assert_eq!(days_in_month(4, 2023), 30);
    assert_eq!(days_in_month(12, -1), 31);
    assert_eq!(
        try_days_in_month(13, 2000),
        Err(FieldOutOfRangeError {
            field: CalendarField::Month,
            value: 13,
        })
    );
    assert_panics!({
        days_in_month(0, 2000);
    });
}

#[test]
fn test_validate() {
    assert_eq!(CalendarFields::date(0, 1, 1).validate(), Err(ZeroYearError.into()));
    assert_eq!(
        CalendarFields::date(2023, 2, 29).validate(),
        Err(FieldOutOfRangeError {
            field: CalendarField::Day,
            value: 29,
        }
        .into())
    );
    assert_eq!(
        CalendarFields::date(2024, 1, 1).with_time(24, 0, 0).validate(),
        Err(FieldOutOfRangeError {
            field: CalendarField::Hour,
            value: 24,
        }
        .into())
    );
    assert!(
        CalendarFields::date(2024, 1, 1).with_fraction(0, 0, 10).validate().is_err(),
        "Hundred nanoseconds only go up to 9."
    );
    assert!(CalendarFields::date(2024, 2, 29).validate().is_ok());
    assert!(CalendarFields::default().validate().is_ok());

    assert_eq!(
        try_compose_from_fields(&CalendarFields::date(0, 1, 1), None),
        Err(ZeroYearError.into())
    );
    assert_panics!({
        compose_from_fields(&CalendarFields::date(2024, 13, 1), None);
    });
}

#[test]
fn test_round_trip_across_year_signs() {
    for year in [-1, 1, 4, -4, 100, -100, 400, -400, 1600, -1600, 2000, -2000, 29227, -29227] {
        let mut dates = vec![(1, 1), (2, 28), (3, 1), (12, 31)];
        if is_leap_year(year) {
            dates.push((2, 29));
        }

        for (month, day) in dates {
            let start = CalendarFields::date(year, month, day);
            let end = start.with_time(23, 59, 59).with_fraction(999, 999, 9);
            for fields in [start, end] {
                let instant = compose_from_fields(&fields, None);
                assert_eq!(decompose(instant, None), fields, "Round trip failed for {fields:?}.");
            }
        }
    }
}

#[test]
fn test_epoch_boundary() {
    assert_eq!(decompose(Instant::EPOCH, None), CalendarFields::date(1, 1, 1));
    assert_eq!(
        decompose(Instant::EPOCH - Duration::TICK, None),
        CalendarFields::date(-1, 12, 31).with_time(23, 59, 59).with_fraction(999, 999, 9),
        "The instant before year 1 should be the end of year -1."
    );
    assert_eq!(
        compose_from_fields(&CalendarFields::date(-1, 1, 1), None),
        Instant::EPOCH - Duration::from_days(365)
    );
    assert_eq!(
        compose_from_fields(&CalendarFields::date(-4, 1, 1), None),
        Instant::EPOCH - Duration::from_days(365 * 4 + 1),
        "Year -4 is a leap year."
    );
    assert_eq!(decompose(Instant::UNIX_EPOCH, None), CalendarFields::date(1970, 1, 1));
}

#[test]
fn test_range_bounds() {
    assert_eq!(compose_from_fields(&max_fields(), None), Instant::MAX);
    assert_eq!(compose_from_fields(&min_fields(), None), Instant::MIN);
    assert_eq!(decompose(Instant::MAX, None), max_fields());
    assert_eq!(decompose(Instant::MIN, None), min_fields());

    let utc = zone::TimeZone::utc();
    assert_eq!(compose_from_fields(&max_fields(), Some(&utc)), Instant::MAX);
    assert_eq!(compose_from_fields(&min_fields(), Some(&utc)), Instant::MIN);
}

#[test]
fn test_saturation() {
    let beyond_max = max_fields().with_fraction(477, 580, 8);
    let beyond_min = min_fields().with_fraction(522, 419, 2);
    assert_eq!(compose_from_fields(&beyond_max, None), Instant::MAX);
    assert_eq!(compose_from_fields(&beyond_min, None), Instant::MIN);
    assert_eq!(compose_from_fields(&CalendarFields::date(30000, 1, 1), None), Instant::MAX);
    assert_eq!(compose_from_fields(&CalendarFields::date(-30000, 1, 1), None), Instant::MIN);
    assert_eq!(
        compose_from_fields(&CalendarFields::date(i32::MIN, 1, 1), None),
        Instant::MIN,
        "Extreme years shouldn't overflow the intermediate arithmetic."
    );

    assert_eq!(Instant::MAX + Duration::SECOND, Instant::MAX);
    assert_eq!(Instant::MIN - Duration::DAY, Instant::MIN);
    assert_eq!(Instant::EPOCH + Duration::MAX, Instant::MAX);
    assert_eq!(Instant::MAX.checked_add(Duration::TICK), None);
    assert_eq!(Instant::MIN.checked_sub(Duration::TICK), None, "Saturating must skip UNDEFINED.");
}

#[test]
fn test_instant_arithmetic() {
    let a = compose_from_fields(&CalendarFields::date(2024, 2, 28), None);
    let b = a + Duration::DAY;
    assert_eq!(decompose(b, None), CalendarFields::date(2024, 2, 29));
    assert_eq!(b - a, Duration::DAY);
    assert_eq!(a - b, Duration::DAY, "The difference between instants should be absolute.");
    assert!(a < b);

    let mut c = b;
    c -= Duration::HOUR;
    assert_eq!(decompose(c, None).hour, 23);
    assert!(Instant::now() > Instant::UNIX_EPOCH);
}

#[test]
fn test_undefined_instant() {
    let undefined = Instant::UNDEFINED;
    assert!(undefined.is_undefined());
    assert_eq!(undefined, Instant::default(), "Equality should still work when undefined.");
    assert_ne!(undefined, Instant::MIN);

    assert_eq!(try_decompose(undefined, None), Err(UndefinedInstantError));
    assert_eq!(undefined.try_cmp(&Instant::EPOCH), Err(UndefinedInstantError));
    assert_eq!(undefined.try_add(Duration::DAY), Err(UndefinedInstantError));
    assert_eq!(undefined.checked_add(Duration::TICK), None);
    assert_eq!(undefined.to_string(), "undefined");

    assert_panics!({
        decompose(Instant::UNDEFINED, None);
    });
    assert_panics!({
        let _ = Instant::UNDEFINED < Instant::EPOCH;
    });
    assert_panics!({
        let _ = Instant::UNDEFINED + Duration::TICK;
    });
}

#[test]
fn test_weekdays() {
    assert_eq!(CalendarFields::date(1, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(CalendarFields::date(2024, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(CalendarFields::date(1970, 1, 1).weekday(), Weekday::Thursday);
    assert_eq!(CalendarFields::date(2000, 2, 29).weekday(), Weekday::Tuesday);
    assert_eq!(CalendarFields::date(-1, 12, 31).weekday(), Weekday::Sunday);
    assert_eq!(Weekday::Sunday.succ(), Weekday::Monday);
    assert_eq!(Weekday::Monday.pred(), Weekday::Sunday);

    assert_eq!(CalendarFields::date(2024, 12, 31).day_of_year(), 366);
    assert_eq!(CalendarFields::date(2023, 3, 1).day_of_year(), 60);
}

#[test]
fn test_format() {
    let leap_day = CalendarFields::date(2024, 2, 29).with_time(13, 45, 30).with_fraction(250, 0, 0);
    assert_eq!(DateTime::new(&leap_day, None).to_string(), "2024-02-29T13:45:30.25Z");
    assert_eq!(
        DateTime::new(&CalendarFields::date(-44, 3, 15).with_time(12, 0, 0), None).to_string(),
        "-0044-03-15T12:00:00Z"
    );
    assert_eq!(Instant::MAX.to_string(), "29228-09-14T02:48:05.4775807Z");
    assert_eq!(Instant::MIN.to_string(), "-29228-04-18T21:11:54.5224193Z");
    assert_eq!(Instant::EPOCH.to_string(), "0001-01-01T00:00:00Z");

    let utc = zone::TimeZone::utc();
    assert_eq!(
        DateTime::from_instant(Instant::EPOCH, Some(&utc)).to_string(),
        "0001-01-01T00:00:00+00:00",
        "An attached zone should print its offset instead of Z."
    );
}

#[test]
fn test_parse() {
    let parsed: Instant = "2024-02-29T13:45:30.25Z".parse().expect("valid timestamp");
    let expected = CalendarFields::date(2024, 2, 29).with_time(13, 45, 30).with_fraction(250, 0, 0);
    assert_eq!(parsed, compose_from_fields(&expected, None));

    let offset: Instant = "2024-02-29T19:15:30.25+05:30".parse().expect("valid timestamp");
    assert_eq!(offset, parsed, "An explicit offset should be removed when parsing.");

    for text in [
        "29228-09-14T02:48:05.4775807Z",
        "-29228-04-18T21:11:54.5224193Z",
        "-0001-12-31T23:59:59.9999999Z",
        "1970-01-01T00:00:00Z",
    ] {
        let instant: Instant = text.parse().expect("valid timestamp");
        assert_eq!(instant.to_string(), text);
    }

    assert_eq!("+2024-01-01T00:00:00Z".parse::<Instant>(), "2024-01-01T00:00:00Z".parse());
    assert_eq!(
        "99999-01-01T00:00:00Z".parse::<Instant>(),
        Ok(Instant::MAX),
        "Out of range timestamps should saturate."
    );
}

#[test]
fn test_parse_errors() {
    let malformed = |position| Err(ParseError::Malformed(MalformedTimestampError { position }));

    assert_eq!("".parse::<Instant>(), malformed(0));
    assert_eq!("024-01-01T00:00:00Z".parse::<Instant>(), malformed(3));
    assert_eq!("2024-1-01T00:00:00Z".parse::<Instant>(), malformed(6));
    assert_eq!("2024-01-01 00:00:00Z".parse::<Instant>(), malformed(10));
    assert_eq!("2024-01-01T00:00:00".parse::<Instant>(), malformed(19));
    assert_eq!("2024-01-01T00:00:00.Z".parse::<Instant>(), malformed(20));
    assert_eq!("2024-01-01T00:00:00.12345678Z".parse::<Instant>(), malformed(27));
    assert_eq!("2024-01-01T00:00:00Zjunk".parse::<Instant>(), malformed(20));

    assert_eq!(
        "0000-01-01T00:00:00Z".parse::<Instant>(),
        Err(ParseError::ZeroYear(ZeroYearError))
    );
    let error = "2023-02-29T00:00:00Z".parse::<Instant>().expect_err("not a leap year");
    assert!(error.is_field_out_of_range());
    assert_eq!(error.to_string(), "day 29 is out of range");
}
