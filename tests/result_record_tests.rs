// Result record and detection snapshot wire format tests

use chrono::{TimeZone, Utc};
use proctor_dashboard::{DetectionSnapshot, ResultRecord, SessionState, WarningLevel};

#[test]
fn test_record_from_state() {
    let state = SessionState {
        elapsed_secs: 90,
        frame_count: 42,
        last_snapshot: Some(DetectionSnapshot {
            cheating_score: 3.5,
            warning_level: WarningLevel::Safe,
            indicators: vec![],
            timestamp: None,
        }),
        ..SessionState::default()
    };

    let now = Utc.with_ymd_and_hms(2026, 10, 19, 14, 30, 0).unwrap();
    let record = ResultRecord::from_state(&state, now);

    let body = serde_json::to_value(&record).unwrap();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 5);
    assert_eq!(body["duration"], "00:01:30");
    assert_eq!(body["final_score"], "3.50");
    assert_eq!(body["status"], "🟢 SAFE");
    assert_eq!(body["total_frames"], 42);
    assert_eq!(body["timestamp"], "2026-10-19T14:30:00.000Z");
}

#[test]
fn test_record_timestamp_is_iso8601() {
    let record = ResultRecord::from_state(&SessionState::default(), Utc::now());

    assert!(record.timestamp.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(&record.timestamp).is_ok());
}

#[test]
fn test_record_before_any_poll() {
    let record = ResultRecord::from_state(&SessionState::default(), Utc::now());

    assert_eq!(record.duration, "00:00:00");
    assert_eq!(record.final_score, "0.00");
    assert_eq!(record.status, "🟢 SAFE");
    assert_eq!(record.total_frames, 0);
}

#[test]
fn test_snapshot_deserialization() {
    let json = r#"{
        "cheating_score": 0.55,
        "indicators": ["Looking down/away", "Hands visible (2)"],
        "timestamp": "2026-10-19T14:30:05.123456",
        "warning_level": "warning"
    }"#;

    let snapshot: DetectionSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.cheating_score, 0.55);
    assert_eq!(snapshot.warning_level, WarningLevel::Warning);
    assert_eq!(snapshot.indicators.len(), 2);
    assert_eq!(snapshot.timestamp.as_deref(), Some("2026-10-19T14:30:05.123456"));
    assert_eq!(snapshot.score_text(), "0.55");
}

#[test]
fn test_snapshot_initial_backend_state() {
    // What the backend returns before its first frame
    let json = r#"{"cheating_score": 0, "indicators": [], "timestamp": null, "warning_level": "safe"}"#;

    let snapshot: DetectionSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot, DetectionSnapshot::default());
}

#[test]
fn test_unknown_warning_level_displays_safe() {
    let snapshot: DetectionSnapshot =
        serde_json::from_str(r#"{"cheating_score": 0.1, "warning_level": "elevated"}"#).unwrap();

    assert_eq!(snapshot.warning_level, WarningLevel::Safe);
    assert!(snapshot.indicators.is_empty());
}

#[test]
fn test_null_warning_level_displays_safe() {
    let snapshot: DetectionSnapshot = serde_json::from_str(
        r#"{"cheating_score": 0.1, "warning_level": null, "indicators": []}"#,
    )
    .unwrap();

    assert_eq!(snapshot.warning_level, WarningLevel::Safe);
    assert_eq!(snapshot.warning_level.label(), "🟢 SAFE");
}

#[test]
fn test_warning_level_labels_and_order() {
    assert_eq!(WarningLevel::Critical.label(), "🔴 CRITICAL");
    assert_eq!(WarningLevel::Warning.label(), "🟠 WARNING");
    assert_eq!(WarningLevel::Safe.label(), "🟢 SAFE");
    assert!(WarningLevel::Safe < WarningLevel::Warning);
    assert!(WarningLevel::Warning < WarningLevel::Critical);
    assert_eq!(
        serde_json::to_string(&WarningLevel::Critical).unwrap(),
        "\"critical\""
    );
}
