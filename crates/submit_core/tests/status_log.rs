use pretty_assertions::assert_eq;
use submit_core::{StatusEntry, StatusKind, StatusLog, STATUS_LOG_CAPACITY};

fn entry(n: usize) -> StatusEntry {
    StatusEntry::new(StatusKind::Pending, format!("entry {n}"), format!("t{n}"))
}

#[test]
fn push_keeps_newest_first_and_caps_length() {
    let mut log = StatusLog::new();
    for n in 0..25 {
        log.push(entry(n));
    }

    assert_eq!(log.len(), STATUS_LOG_CAPACITY);
    let messages: Vec<_> = log.iter().map(|e| e.message.clone()).collect();
    let expected: Vec<_> = (5..25).rev().map(|n| format!("entry {n}")).collect();
    assert_eq!(messages, expected);
    assert_eq!(log.latest(), Some(&entry(24)));
}

#[test]
fn restore_truncates_oversized_history() {
    let log = StatusLog::from_newest_first((0..30).map(entry));
    assert_eq!(log.len(), STATUS_LOG_CAPACITY);
    assert_eq!(log.latest(), Some(&entry(0)));
    assert_eq!(log.to_vec().last(), Some(&entry(19)));
}

#[test]
fn clear_empties_the_log() {
    let mut log = StatusLog::from_newest_first((0..3).map(entry));
    log.clear();
    assert!(log.is_empty());
    assert_eq!(log.latest(), None);
}

#[test]
fn entries_serialize_with_lowercase_kind() {
    let json = serde_json::to_string(&StatusEntry::new(StatusKind::Success, "ok", "now")).unwrap();
    assert_eq!(json, r#"{"kind":"success","message":"ok","timestamp":"now"}"#);
}

#[test]
fn legacy_type_field_is_accepted() {
    let parsed: StatusEntry =
        serde_json::from_str(r#"{"type":"error","message":"boom","timestamp":"then"}"#).unwrap();
    assert_eq!(parsed, StatusEntry::new(StatusKind::Error, "boom", "then"));
}
