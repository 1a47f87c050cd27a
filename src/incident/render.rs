// render.rs
use crate::clock;
use crate::incident::IncidentRecord;
use chrono::DateTime;
use chrono_tz::Tz;

/// One-line bullet for a scheduled maintenance entry.
pub fn format_maintenance(entry: &IncidentRecord) -> String {
    let mut out = format!(
        "• 👷 {}: Scheduled maintenance on {}",
        entry.date.format(clock::DATE_FORMAT),
        entry.operator
    );
    if let Some(start) = entry.start {
        out.push_str(&format!(" starting at: {}", format_stamp(entry.date, start)));
    }
    if let Some(stop) = entry.stop {
        out.push_str(&format!(" lasting until: {}", format_stamp(entry.date, stop)));
    }
    if !entry.location.is_empty() {
        out.push_str(&format!(" in {}", entry.location));
    }
    out
}

/// One-line bullet for an unplanned disruption.
pub fn format_disruption(entry: &IncidentRecord) -> String {
    let mut out = format!(
        "• 🔥 {}: Ongoing service disruption on {}",
        entry.date.format(clock::DATE_FORMAT),
        entry.operator
    );
    if !entry.location.is_empty() {
        out.push_str(&format!(" in {}", entry.location));
    }
    out
}

// Window stamps on the incident's own day drop the redundant date part.
fn format_stamp(date: DateTime<Tz>, stamp: DateTime<Tz>) -> String {
    if clock::same_day(date, stamp) {
        stamp.format(clock::TIME_FORMAT).to_string()
    } else {
        stamp.format(clock::DATE_TIME_FORMAT).to_string()
    }
}
