// clock.rs
//
// All feed timestamps are civil times in Bahnhof's home zone. The zone is
// resolved once per process; parse failures surface as the epoch sentinel,
// never as errors.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::sync::OnceLock;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const TIME_FORMAT: &str = "%H:%M";

const FEED_ZONE: &str = "Europe/Stockholm";

static ZONE: OnceLock<Tz> = OnceLock::new();

/// The time zone feed dates are interpreted in. If the zone name ever fails
/// to resolve we quietly fall back to UTC rather than refusing to run.
pub fn zone() -> Tz {
    *ZONE.get_or_init(|| FEED_ZONE.parse().unwrap_or(Tz::UTC))
}

/// Stand-in for "failed to parse": the Unix epoch in the feed zone.
pub fn sentinel() -> DateTime<Tz> {
    DateTime::<Utc>::UNIX_EPOCH.with_timezone(&zone())
}

/// Parses `YYYY-MM-DD` to midnight in the feed zone, or the sentinel.
pub fn parse_date(s: &str) -> DateTime<Tz> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(|dt| zone().from_local_datetime(&dt).single())
        .unwrap_or_else(sentinel)
}

/// Parses `YYYY-MM-DD HH:MM` in the feed zone, or the sentinel. Times inside
/// a DST fold resolve to the earlier occurrence.
pub fn parse_datetime(s: &str) -> DateTime<Tz> {
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
        .ok()
        .and_then(|dt| zone().from_local_datetime(&dt).earliest())
        .unwrap_or_else(sentinel)
}

pub fn same_day(a: DateTime<Tz>, b: DateTime<Tz>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Serde adapter for zoned timestamps: RFC 3339 on the wire, re-anchored to
/// the feed zone on the way back in.
pub mod serde_zoned {
    use super::zone;
    use chrono::DateTime;
    use chrono_tz::Tz;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Tz>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Tz>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&zone()))
            .map_err(serde::de::Error::custom)
    }
}

/// Same adapter for the optional start/stop fields.
pub mod serde_zoned_opt {
    use super::zone;
    use chrono::DateTime;
    use chrono_tz::Tz;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &Option<DateTime<Tz>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Tz>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        match s {
            Some(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| Some(dt.with_timezone(&zone())))
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
