use std::sync::Arc;

use super::{DstRule, UtcOffset};

/// A time zone: a base offset from UTC and an optional daylight saving schedule.
///
/// Zones are usually borrowed from a [`TimeZoneRegistry`](super::TimeZoneRegistry) rather than
/// owned by the values that use them.
#[derive(Debug, Clone)]
pub struct TimeZone {
    id: String,
    abbreviation: String,
    base_offset: UtcOffset,
    dst_rule: Option<Arc<dyn DstRule>>,
}

impl TimeZone {
    /// Creates a time zone with no daylight saving.
    pub fn fixed(
        id: impl Into<String>,
        abbreviation: impl Into<String>,
        base_offset: UtcOffset,
    ) -> TimeZone {
        TimeZone {
            id: id.into(),
            abbreviation: abbreviation.into(),
            base_offset,
            dst_rule: None,
        }
    }

    /// Creates a time zone which observes daylight saving according to `rule`.
    pub fn with_dst(
        id: impl Into<String>,
        abbreviation: impl Into<String>,
        base_offset: UtcOffset,
        rule: impl DstRule + 'static,
    ) -> TimeZone {
        TimeZone {
            dst_rule: Some(Arc::new(rule)),
            ..TimeZone::fixed(id, abbreviation, base_offset)
        }
    }

    pub fn utc() -> TimeZone {
        TimeZone::fixed("UTC", "UTC", UtcOffset::UTC)
    }

    /// The region id of this zone, such as `Europe/Berlin`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub const fn base_offset(&self) -> UtcOffset {
        self.base_offset
    }

    pub fn dst_rule(&self) -> Option<&dyn DstRule> {
        self.dst_rule.as_deref()
    }

    pub const fn observes_dst(&self) -> bool {
        self.dst_rule.is_some()
    }
}
