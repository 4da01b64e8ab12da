#![cfg(test)]

use super::*;
use crate::time::{CalendarFields, DateTime, Duration, Instant, UndefinedInstantError, Weekday};
use crate::time::calendar::compose_from_fields;
use crate::util::panic::assert_panics;

fn utc(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Instant {
    compose_from_fields(&CalendarFields::date(year, month, day).with_time(hour, minute, 0), None)
}

fn central_european() -> TimeZone {
    TimeZone::with_dst(
        "Test/Central",
        "TST",
        UtcOffset::east(1, 0),
        AnnualDstRule::new(
            UtcOffset::east(1, 0),
            TransitionRule::new(
                3,
                WeekOfMonth::Last,
                Weekday::Sunday,
                Duration::HOUR,
                TransitionClock::Utc,
            ),
            TransitionRule::new(
                10,
                WeekOfMonth::Last,
                Weekday::Sunday,
                Duration::HOUR,
                TransitionClock::Utc,
            ),
        ),
    )
}

fn sunday_at_two(month: u8, week: WeekOfMonth, clock: TransitionClock) -> TransitionRule {
    TransitionRule::new(month, week, Weekday::Sunday, Duration::from_hours(2), clock)
}

#[test]
fn test_offset_boundaries() {
    let zone = central_european();
    let start = utc(2024, 3, 31, 1, 0);
    let end = utc(2024, 10, 27, 1, 0);

    assert_eq!(calculate_offset(start, &zone), UtcOffset::east(2, 0), "DST starts inclusively.");
    assert_eq!(calculate_offset(start - Duration::TICK, &zone), UtcOffset::east(1, 0));
    assert_eq!(calculate_offset(end - Duration::TICK, &zone), UtcOffset::east(2, 0));
    assert_eq!(calculate_offset(end, &zone), UtcOffset::east(1, 0), "DST ends exclusively.");

    assert!(is_dst_active(utc(2024, 7, 1, 12, 0), &zone));
    assert!(!is_dst_active(utc(2024, 12, 1, 12, 0), &zone));
}

#[test]
fn test_dst_year_range() {
    let zone = central_european();
    assert_eq!(
        calculate_offset(utc(1915, 7, 1, 12, 0), &zone),
        UtcOffset::east(1, 0),
        "DST is never applied before 1916."
    );
    assert_eq!(calculate_offset(utc(1916, 7, 1, 12, 0), &zone), UtcOffset::east(2, 0));
    assert_eq!(calculate_offset(utc(9999, 7, 1, 12, 0), &zone), UtcOffset::east(2, 0));
    assert_eq!(calculate_offset(utc(10000, 7, 1, 12, 0), &zone), UtcOffset::east(1, 0));
    assert_eq!(calculate_offset(utc(-2024, 7, 1, 12, 0), &zone), UtcOffset::east(1, 0));

    assert_eq!(try_calculate_offset(Instant::UNDEFINED, &zone), Err(UndefinedInstantError));
    assert_panics!({
        is_dst_active(Instant::UNDEFINED, &central_european());
    });
}

#[test]
fn test_transition_days() {
    let rule = |month, week| {
        TransitionRule::new(month, week, Weekday::Sunday, Duration::ZERO, TransitionClock::Utc)
    };
    assert_eq!(rule(3, WeekOfMonth::Last).day_in_year(2024), 31);
    assert_eq!(rule(3, WeekOfMonth::Second).day_in_year(2024), 10);
    assert_eq!(rule(11, WeekOfMonth::First).day_in_year(2024), 3);
    assert_eq!(rule(10, WeekOfMonth::Last).day_in_year(2024), 27);

    let last_friday = TransitionRule {
        month: 2,
        weekday: Weekday::Friday,
        ..rule(2, WeekOfMonth::Last)
    };
    assert_eq!(last_friday.day_in_year(2024), 23);
    let fourth_thursday = TransitionRule {
        week: WeekOfMonth::Fourth,
        weekday: Weekday::Thursday,
        ..last_friday
    };
    assert_eq!(fourth_thursday.day_in_year(2024), 22);
}

#[test]
fn test_wall_clock_transitions() {
    let new_york = TimeZone::with_dst(
        "Test/Eastern",
        "EST",
        UtcOffset::west(5, 0),
        AnnualDstRule::new(
            UtcOffset::east(1, 0),
            sunday_at_two(3, WeekOfMonth::Second, TransitionClock::Wall),
            sunday_at_two(11, WeekOfMonth::First, TransitionClock::Wall),
        ),
    );

    // 02:00 EST and 02:00 EDT respectively.
    let start = utc(2024, 3, 10, 7, 0);
    let end = utc(2024, 11, 3, 6, 0);
    assert_eq!(calculate_offset(start, &new_york), UtcOffset::west(4, 0));
    assert_eq!(calculate_offset(start - Duration::TICK, &new_york), UtcOffset::west(5, 0));
    assert_eq!(calculate_offset(end - Duration::TICK, &new_york), UtcOffset::west(4, 0));
    assert_eq!(calculate_offset(end, &new_york), UtcOffset::west(5, 0));
}

#[test]
fn test_southern_hemisphere() {
    let sydney = TimeZone::with_dst(
        "Test/Sydney",
        "AEST",
        UtcOffset::east(10, 0),
        AnnualDstRule::new(
            UtcOffset::east(1, 0),
            sunday_at_two(10, WeekOfMonth::First, TransitionClock::Standard),
            sunday_at_two(4, WeekOfMonth::First, TransitionClock::Standard),
        ),
    );

    assert_eq!(calculate_offset(utc(2024, 1, 15, 0, 0), &sydney), UtcOffset::east(11, 0));
    assert_eq!(calculate_offset(utc(2024, 7, 15, 0, 0), &sydney), UtcOffset::east(10, 0));
    assert_eq!(calculate_offset(utc(2024, 12, 31, 23, 0), &sydney), UtcOffset::east(11, 0));

    let end = utc(2024, 4, 6, 16, 0);
    let start = utc(2024, 10, 5, 16, 0);
    assert_eq!(calculate_offset(end - Duration::TICK, &sydney), UtcOffset::east(11, 0));
    assert_eq!(calculate_offset(end, &sydney), UtcOffset::east(10, 0));
    assert_eq!(calculate_offset(start - Duration::TICK, &sydney), UtcOffset::east(10, 0));
    assert_eq!(calculate_offset(start, &sydney), UtcOffset::east(11, 0));
}

#[test]
fn test_local_composition() {
    let zone = central_european();
    let summer = CalendarFields::date(2024, 7, 1).with_time(12, 0, 0);
    let winter = CalendarFields::date(2024, 1, 1).with_time(12, 0, 0);

    let date_time = DateTime::new(&summer, Some(&zone));
    assert_eq!(date_time.instant(), utc(2024, 7, 1, 10, 0));
    assert_eq!(date_time.fields(), summer, "Local fields should round trip through a zone.");
    assert_eq!(date_time.to_string(), "2024-07-01T12:00:00+02:00");
    assert_eq!(DateTime::new(&winter, Some(&zone)).to_string(), "2024-01-01T12:00:00+01:00");

    // 02:30 doesn't exist on the day DST starts, and happens twice on the day it ends.
    let skipped = CalendarFields::date(2024, 3, 31).with_time(2, 30, 0);
    assert_eq!(DateTime::new(&skipped, Some(&zone)).to_string(), "2024-03-31T03:30:00+02:00");
    let repeated = CalendarFields::date(2024, 10, 27).with_time(2, 30, 0);
    assert_eq!(DateTime::new(&repeated, Some(&zone)).to_string(), "2024-10-27T02:30:00+02:00");

    let parsed = DateTime::parse("2024-07-01T10:00:00Z", Some(&zone)).expect("valid timestamp");
    assert_eq!(parsed, date_time, "Zones shouldn't affect equality.");
    assert_eq!(parsed.hour(), 12);
    assert_eq!(parsed.with_zone(None).hour(), 10);
}

#[test]
fn test_utc_offset() {
    assert_eq!(UtcOffset::east(1, 0) + UtcOffset::west(3, 30), UtcOffset::west(2, 30));
    assert_eq!(UtcOffset::west(2, 30).to_string(), "-02:30");
    assert_eq!(UtcOffset::east(5, 45).to_string(), "+05:45");
    assert_eq!(UtcOffset::UTC.to_string(), "+00:00");
    assert_eq!(-UtcOffset::UTC, UtcOffset::UTC, "Zero offsets should never be negative.");
    assert_eq!(UtcOffset::new(true, Duration::ZERO), UtcOffset::UTC);
    assert_eq!(-UtcOffset::east(9, 0), UtcOffset::west(9, 0));
    assert_eq!(UtcOffset::from_ticks(-(Duration::HOUR.ticks() as i128)), UtcOffset::west(1, 0));
    assert_eq!(UtcOffset::west(3, 30).ticks(), -126_000_000_000);
}

#[cfg(feature = "tz")]
mod registry {
    use super::*;

    #[test]
    fn test_builtin_zones() {
        let registry = TimeZoneRegistry::global();
        assert_eq!(registry.len(), 12);
        assert_eq!(registry.ids().count(), 12);
        assert!(std::ptr::eq(registry, TimeZoneRegistry::global()), "The registry is built once.");

        let berlin = registry.zone("Europe/Berlin");
        assert_eq!(berlin.id(), "Europe/Berlin");
        assert_eq!(berlin.base_offset(), UtcOffset::east(1, 0));
        assert!(berlin.observes_dst());
        assert!(!registry.zone("Asia/Tokyo").observes_dst());

        let summer = utc(2024, 7, 4, 16, 0);
        let offset_in = |id: &str| calculate_offset(summer, registry.zone(id));
        assert_eq!(offset_in("UTC"), UtcOffset::UTC);
        assert_eq!(offset_in("Europe/London"), UtcOffset::east(1, 0));
        assert_eq!(offset_in("America/New_York"), UtcOffset::west(4, 0));
        assert_eq!(offset_in("America/Los_Angeles"), UtcOffset::west(7, 0));
        assert_eq!(offset_in("America/St_Johns"), UtcOffset::west(2, 30));
        assert_eq!(offset_in("Australia/Sydney"), UtcOffset::east(10, 0));
        assert_eq!(offset_in("Asia/Kolkata"), UtcOffset::east(5, 30));

        let date_time = DateTime::from_instant(summer, Some(registry.zone("America/New_York")));
        assert_eq!(date_time.to_string(), "2024-07-04T12:00:00-04:00");
    }

    #[test]
    fn test_unknown_zone() {
        let registry = TimeZoneRegistry::builtin();
        let error = registry.try_zone("Mars/Olympus_Mons").expect_err("not a real zone");
        assert_eq!(error.id, "Mars/Olympus_Mons");
        assert_eq!(error.to_string(), "unknown time zone id \"Mars/Olympus_Mons\"");
        assert!(registry.get("europe/berlin").is_none(), "Ids are case sensitive.");

        assert_panics!({
            TimeZoneRegistry::builtin().zone("Nowhere");
        });
    }

    #[test]
    fn test_register() {
        let mut registry = TimeZoneRegistry::empty();
        assert!(registry.is_empty());

        assert!(registry.register(central_european()).is_none());
        assert!(registry.contains("Test/Central"));

        let fixed = TimeZone::fixed("Test/Central", "TCT", UtcOffset::east(3, 0));
        let replaced = registry.register(fixed);
        assert_eq!(replaced.map(|zone| zone.abbreviation().to_owned()), Some("TST".to_owned()));
        assert_eq!(registry.len(), 1, "Registering an existing id should replace the zone.");
        assert_eq!(registry.zone("Test/Central").base_offset(), UtcOffset::east(3, 0));
    }
}
