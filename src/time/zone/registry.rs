use std::mem;
use std::sync::OnceLock;

use derive_more::{Display, Error};
use tracing::{debug, trace};

use super::{
    AnnualDstRule, TimeZone, TransitionClock, TransitionRule, UtcOffset, WeekOfMonth,
};
use crate::collections::hash::HashMap;
use crate::time::{Duration, Weekday};
use crate::util::result::ResultExtension;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("unknown time zone id {id:?}")]
pub struct UnknownTimeZoneError {
    pub id: String,
}

/// A table of [`TimeZone`]s, keyed by region id.
///
/// Zones never move once registered, so references handed out by a registry live as long as the
/// registry does. [`TimeZoneRegistry::global`] is never dropped, so its zones are `'static`.
#[derive(Debug)]
pub struct TimeZoneRegistry {
    zones: HashMap<String, TimeZone>,
}

const BUCKET_COUNT: usize = 32;
const SLOTS_PER_BUCKET: usize = 2;

impl TimeZoneRegistry {
    /// Creates a registry with no zones.
    pub fn empty() -> TimeZoneRegistry {
        TimeZoneRegistry {
            zones: HashMap::new(BUCKET_COUNT, SLOTS_PER_BUCKET),
        }
    }

    /// Creates a registry containing the built-in zones. Each zone uses its current rules for
    /// every year.
    pub fn builtin() -> TimeZoneRegistry {
        let mut registry = TimeZoneRegistry::empty();
        for zone in builtin_zones() {
            registry.register(zone);
        }
        debug!(zones = registry.len(), "built time zone registry");
        registry
    }

    /// The process-wide registry of built-in zones, created on first use.
    pub fn global() -> &'static TimeZoneRegistry {
        static GLOBAL: OnceLock<TimeZoneRegistry> = OnceLock::new();
        GLOBAL.get_or_init(TimeZoneRegistry::builtin)
    }

    /// Adds `zone` under its id, returning the zone it replaced, if any.
    pub fn register(&mut self, zone: TimeZone) -> Option<TimeZone> {
        if let Some(existing) = self.zones.get_mut(zone.id()) {
            Some(mem::replace(existing, zone))
        } else {
            self.zones.add(zone.id().to_owned(), zone);
            None
        }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.zones.contains_key(id)
    }

    /// Returns the zone with the given region id, if it is registered.
    pub fn get(&self, id: &str) -> Option<&TimeZone> {
        trace!(id, "time zone lookup");
        self.zones.get(id)
    }

    /// Returns the zone with the given region id.
    ///
    /// # Panics
    /// Panics if no zone is registered under `id`.
    pub fn zone(&self, id: &str) -> &TimeZone {
        self.try_zone(id).throw()
    }

    /// Returns the zone with the given region id, or an [`Err`] if no zone is registered under
    /// `id`.
    pub fn try_zone(&self, id: &str) -> Result<&TimeZone, UnknownTimeZoneError> {
        self.get(id).ok_or_else(|| UnknownTimeZoneError {
            id: id.to_owned(),
        })
    }

    /// Returns the ids of every registered zone, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.zones.keys().map(String::as_str)
    }
}

impl Default for TimeZoneRegistry {
    fn default() -> Self {
        TimeZoneRegistry::builtin()
    }
}

const fn at(hours: u64) -> Duration {
    Duration::from_hours(hours)
}

const EU: AnnualDstRule = AnnualDstRule::new(
    UtcOffset::east(1, 0),
    TransitionRule::new(3, WeekOfMonth::Last, Weekday::Sunday, at(1), TransitionClock::Utc),
    TransitionRule::new(10, WeekOfMonth::Last, Weekday::Sunday, at(1), TransitionClock::Utc),
);

const US: AnnualDstRule = AnnualDstRule::new(
    UtcOffset::east(1, 0),
    TransitionRule::new(3, WeekOfMonth::Second, Weekday::Sunday, at(2), TransitionClock::Wall),
    TransitionRule::new(11, WeekOfMonth::First, Weekday::Sunday, at(2), TransitionClock::Wall),
);

const AN: AnnualDstRule = AnnualDstRule::new(
    UtcOffset::east(1, 0),
    TransitionRule::new(10, WeekOfMonth::First, Weekday::Sunday, at(2), TransitionClock::Standard),
    TransitionRule::new(4, WeekOfMonth::First, Weekday::Sunday, at(2), TransitionClock::Standard),
);

fn builtin_zones() -> [TimeZone; 12] {
    [
        TimeZone::utc(),
        TimeZone::with_dst("Europe/London", "GMT", UtcOffset::UTC, EU),
        TimeZone::with_dst("Europe/Berlin", "CET", UtcOffset::east(1, 0), EU),
        TimeZone::with_dst("Europe/Paris", "CET", UtcOffset::east(1, 0), EU),
        TimeZone::with_dst("America/New_York", "EST", UtcOffset::west(5, 0), US),
        TimeZone::with_dst("America/Chicago", "CST", UtcOffset::west(6, 0), US),
        TimeZone::with_dst("America/Denver", "MST", UtcOffset::west(7, 0), US),
        TimeZone::with_dst("America/Los_Angeles", "PST", UtcOffset::west(8, 0), US),
        TimeZone::with_dst("America/St_Johns", "NST", UtcOffset::west(3, 30), US),
        TimeZone::with_dst("Australia/Sydney", "AEST", UtcOffset::east(10, 0), AN),
        TimeZone::fixed("Asia/Tokyo", "JST", UtcOffset::east(9, 0)),
        TimeZone::fixed("Asia/Kolkata", "IST", UtcOffset::east(5, 30)),
    ]
}
