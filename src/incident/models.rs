// models.rs
use crate::incident::{title, window};
use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// One parsed status entry. Constructed once (from a feed entry or directly
/// in tests) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub location: String,
    pub operator: String,
    pub planned: bool,
    #[serde(with = "crate::clock::serde_zoned")]
    pub date: DateTime<Tz>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::clock::serde_zoned_opt"
    )]
    pub start: Option<DateTime<Tz>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::clock::serde_zoned_opt"
    )]
    pub stop: Option<DateTime<Tz>>,
}

/// Wire shape of one entry in the feed's `open` array. Everything structured
/// about an incident is derived from these free-text fields.
#[derive(Debug, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    #[serde(default)]
    pub messages: Vec<FeedMessage>,
}

#[derive(Debug, Deserialize)]
pub struct FeedMessage {
    pub message: String,
}

impl From<FeedEntry> for IncidentRecord {
    fn from(entry: FeedEntry) -> Self {
        let fields = title::parse_title(&entry.title);
        let (start, stop) =
            window::parse_window(entry.messages.iter().map(|m| m.message.as_str()));

        IncidentRecord {
            location: fields.location,
            operator: fields.operator,
            planned: fields.planned,
            date: fields.date,
            start,
            stop,
        }
    }
}

/// Ascending by date; ties keep the feed's original order.
pub fn sort_by_date(records: &mut [IncidentRecord]) {
    records.sort_by_key(|r| r.date);
}
