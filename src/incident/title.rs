// title.rs
//
// Feed titles follow a loose template:
//
//   Driftstörning - 2022-03-30 - Planerat Servicearbete - Bodekullsvägen, Karlshamn (Open Universe)
//
// with the maintenance marker and the "location (operator)" parts optional.
// A single pattern with named groups carries the whole grammar; splitting on
// hyphens would break on locations with embedded dashes.

use crate::clock;
use chrono::DateTime;
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\p{L}+ - (?P<date>\d{4}-\d{2}-\d{2}) - (?P<planned>planerat servicearbete - )?(?P<rest>.*)$",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq)]
pub struct TitleFields {
    pub date: DateTime<Tz>,
    pub location: String,
    pub operator: String,
    pub planned: bool,
}

/// Extracts the structured fields from one feed title. A title the pattern
/// rejects yields a degraded result (sentinel date, empty fields) so a single
/// malformed entry never sinks the whole batch.
pub fn parse_title(title: &str) -> TitleFields {
    let Some(caps) = TITLE_PATTERN.captures(title) else {
        return TitleFields {
            date: clock::sentinel(),
            location: String::new(),
            operator: String::new(),
            planned: false,
        };
    };

    let planned = caps.name("planned").is_some();
    let rest = caps.name("rest").map_or("", |m| m.as_str());
    let (location, operator) = split_location_operator(rest);
    let date = caps
        .name("date")
        .map_or_else(clock::sentinel, |m| clock::parse_date(m.as_str()));

    TitleFields {
        date,
        location,
        operator,
        planned,
    }
}

/// Splits a title fragment into `(location, operator)`.
///
/// `"Ludvika (IP-Only)"` → both; `"Kurbit Stadsnät"` → operator only;
/// `"(IP-Only)"` → operator only. Two or more `(` make the fragment
/// ambiguous and both come back empty.
pub fn split_location_operator(fragment: &str) -> (String, String) {
    if let Some(inner) = fragment.strip_prefix('(') {
        let operator = inner.strip_suffix(')').unwrap_or(inner);
        return (String::new(), operator.trim().to_string());
    }

    let parts: Vec<&str> = fragment.split('(').collect();
    match parts[..] {
        [operator] => (String::new(), operator.trim().to_string()),
        [location, operator] => {
            let operator = operator.strip_suffix(')').unwrap_or(operator);
            (location.trim().to_string(), operator.trim().to_string())
        }
        _ => (String::new(), String::new()),
    }
}
