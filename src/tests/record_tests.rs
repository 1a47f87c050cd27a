// src/tests/record_tests.rs

use crate::clock;
use crate::incident::{sort_by_date, FeedEntry, IncidentRecord};
use chrono::TimeZone;
use chrono_tz::Tz;

fn stockholm(y: i32, m: u32, d: u32) -> chrono::DateTime<Tz> {
    clock::zone().with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn record(operator: &str, date: chrono::DateTime<Tz>) -> IncidentRecord {
    IncidentRecord {
        location: String::new(),
        operator: operator.to_string(),
        planned: false,
        date,
        start: None,
        stop: None,
    }
}

#[test]
fn feed_entry_decodes_into_a_full_record() {
    let entry: FeedEntry = serde_json::from_str(
        r#"{
            "title": "Driftstörning - 2022-03-30 - Planerat Servicearbete - Bodekullsvägen, Karlshamn (Open Universe)",
            "messages": [
                {"message": "Vi utför arbete i området."},
                {"message": "Start: 2022-03-30 08:00 Stop: 2022-03-30 10:00"}
            ]
        }"#,
    )
    .unwrap();

    let record = IncidentRecord::from(entry);
    let zone = clock::zone();

    assert_eq!(record.date, stockholm(2022, 3, 30));
    assert_eq!(record.location, "Bodekullsvägen, Karlshamn");
    assert_eq!(record.operator, "Open Universe");
    assert!(record.planned);
    assert_eq!(record.start, Some(zone.with_ymd_and_hms(2022, 3, 30, 8, 0, 0).unwrap()));
    assert_eq!(record.stop, Some(zone.with_ymd_and_hms(2022, 3, 30, 10, 0, 0).unwrap()));
}

#[test]
fn feed_entry_without_messages_has_no_window() {
    let entry: FeedEntry =
        serde_json::from_str(r#"{"title": "Driftstörning - 2022-03-29 - Ludvika (IP-Only)"}"#)
            .unwrap();

    let record = IncidentRecord::from(entry);

    assert_eq!(record.start, None);
    assert_eq!(record.stop, None);
    assert!(!record.planned);
}

#[test]
fn json_round_trip_preserves_all_fields() {
    let zone = clock::zone();
    let records = vec![
        IncidentRecord {
            location: "Ludvika".to_string(),
            operator: "IP-Only".to_string(),
            planned: false,
            date: stockholm(2022, 3, 29),
            start: None,
            stop: None,
        },
        IncidentRecord {
            location: String::new(),
            operator: "Open Universe".to_string(),
            planned: true,
            date: stockholm(2022, 3, 30),
            start: Some(zone.with_ymd_and_hms(2022, 3, 30, 8, 0, 0).unwrap()),
            stop: Some(zone.with_ymd_and_hms(2022, 3, 30, 10, 0, 0).unwrap()),
        },
    ];

    let json = serde_json::to_string(&records).unwrap();
    let decoded: Vec<IncidentRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, records);
}

#[test]
fn absent_window_is_omitted_from_json() {
    let json = serde_json::to_string(&record("IP-Only", stockholm(2022, 3, 29))).unwrap();

    assert!(!json.contains("start"));
    assert!(!json.contains("stop"));
    assert!(json.contains("\"operator\":\"IP-Only\""));
}

#[test]
fn render_json_uses_four_space_indent() {
    let records = vec![record("IP-Only", stockholm(2022, 3, 29))];
    let json = crate::render_json(&records).unwrap();

    assert!(json.contains("\n    {"));
    assert!(json.contains("\n        \"location\""));
}

#[test]
fn sort_is_stable_for_equal_dates() {
    let mut records = vec![
        record("later", stockholm(2022, 4, 2)),
        record("first", stockholm(2022, 3, 29)),
        record("second", stockholm(2022, 3, 29)),
        record("third", stockholm(2022, 3, 29)),
    ];

    sort_by_date(&mut records);

    let operators: Vec<&str> = records.iter().map(|r| r.operator.as_str()).collect();
    assert_eq!(operators, ["first", "second", "third", "later"]);
}

#[test]
fn sentinel_date_sorts_before_real_dates() {
    let mut records = vec![
        record("real", stockholm(2022, 3, 29)),
        record("degraded", clock::sentinel()),
    ];

    sort_by_date(&mut records);

    assert_eq!(records[0].operator, "degraded");
}
