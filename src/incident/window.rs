// window.rs
//
// The feed's status messages are free text, but entries with a known outage
// period embed a "Start: <datetime> ... Stop: <datetime>" pair somewhere in
// one of them.

use crate::clock;
use chrono::DateTime;
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

static START_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Start:\s+(?P<time>\d{4}-\d{2}-\d{2} \d{2}:\d{2})").unwrap());
static STOP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Stop:\s+(?P<time>\d{4}-\d{2}-\d{2} \d{2}:\d{2})").unwrap());

/// Scans messages in order for a start/stop pair. Both markers must appear
/// in the same message and both timestamps must parse; the first message
/// that qualifies wins and later ones are ignored. Anything less yields
/// `(None, None)` — a window is never half-populated.
pub fn parse_window<'a, I>(messages: I) -> (Option<DateTime<Tz>>, Option<DateTime<Tz>>)
where
    I: IntoIterator<Item = &'a str>,
{
    for message in messages {
        let (Some(start), Some(stop)) = (
            START_PATTERN.captures(message).and_then(|c| c.name("time")),
            STOP_PATTERN.captures(message).and_then(|c| c.name("time")),
        ) else {
            continue;
        };

        let start = clock::parse_datetime(start.as_str());
        let stop = clock::parse_datetime(stop.as_str());
        if start == clock::sentinel() || stop == clock::sentinel() {
            continue;
        }

        return (Some(start), Some(stop));
    }

    (None, None)
}
