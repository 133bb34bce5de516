//! Unit tests for the device status tracker.
//!
//! Run with: cargo test --test status_unit_test

use chrono::{Duration, TimeZone, Utc};

use aquamon::status::{LiveStatus, StatusTracker};

fn tracker() -> StatusTracker {
    StatusTracker::new(Duration::seconds(120))
}

#[test]
fn starts_disconnected() {
    let tracker = tracker();
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();

    assert_eq!(tracker.status_at(now), LiveStatus::Disconnected);
    let snapshot = tracker.snapshot();
    assert!(!snapshot.connected);
    assert!(snapshot.last_updated.is_none());
}

#[test]
fn on_payload_connects() {
    let tracker = tracker();
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();

    tracker.apply_payload(b"\"ON\"", now);

    assert_eq!(tracker.status_at(now), LiveStatus::Connected);
    let snapshot = tracker.snapshot();
    assert!(snapshot.connected);
    assert_eq!(snapshot.last_updated, Some(now));
}

#[test]
fn off_payload_disconnects() {
    let tracker = tracker();
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();

    tracker.apply_payload(b"\"ON\"", now);
    tracker.apply_payload(b"\"OFF\"", now + Duration::seconds(5));

    assert_eq!(
        tracker.status_at(now + Duration::seconds(5)),
        LiveStatus::Disconnected
    );
}

#[test]
fn any_other_payload_disconnects() {
    let tracker = tracker();
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();

    for payload in [&b"\"on\""[..], b"\"STANDBY\"", b"42", b"true"] {
        tracker.apply_payload(b"\"ON\"", now);
        tracker.apply_payload(payload, now);
        assert_eq!(
            tracker.status_at(now),
            LiveStatus::Disconnected,
            "payload {:?} should disconnect",
            String::from_utf8_lossy(payload)
        );
    }
}

#[test]
fn malformed_payload_disconnects_without_panicking() {
    let tracker = tracker();
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();

    tracker.apply_payload(b"not json at all", now);

    assert_eq!(tracker.status_at(now), LiveStatus::Disconnected);
    assert_eq!(tracker.snapshot().last_updated, Some(now));
}

#[test]
fn object_payload_captures_health_flags() {
    let tracker = tracker();
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();

    tracker.apply_payload(
        br#"{"status":"ON","wifi_status":"connected","aws_status":"connected"}"#,
        now,
    );

    assert_eq!(tracker.status_at(now), LiveStatus::Connected);
    let snapshot = tracker.snapshot();
    assert_eq!(snapshot.wifi_status.as_deref(), Some("connected"));
    assert_eq!(snapshot.uplink_status.as_deref(), Some("connected"));
}

#[test]
fn connected_snapshot_goes_stale_without_new_messages() {
    let tracker = tracker();
    let heard_at = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();

    tracker.apply_payload(b"\"ON\"", heard_at);

    // Within the threshold it still reads connected
    assert_eq!(
        tracker.status_at(heard_at + Duration::seconds(60)),
        LiveStatus::Connected
    );

    // Past the threshold it reads stale, with no new message required
    assert_eq!(
        tracker.status_at(heard_at + Duration::seconds(121)),
        LiveStatus::Stale {
            last_updated: heard_at
        }
    );
}

#[test]
fn confirmed_off_does_not_go_stale() {
    let tracker = tracker();
    let heard_at = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();

    tracker.apply_payload(b"\"OFF\"", heard_at);

    assert_eq!(
        tracker.status_at(heard_at + Duration::hours(3)),
        LiveStatus::Disconnected
    );
}

#[test]
fn status_serializes_with_state_tag() {
    let heard_at = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();

    let connected = serde_json::to_value(LiveStatus::Connected).unwrap();
    assert_eq!(connected["state"], "connected");

    let stale = serde_json::to_value(LiveStatus::Stale {
        last_updated: heard_at,
    })
    .unwrap();
    assert_eq!(stale["state"], "stale");
    assert!(stale["last_updated"].is_string());
}
