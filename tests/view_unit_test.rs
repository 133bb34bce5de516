//! Unit tests for display series projection.
//!
//! Run with: cargo test --test view_unit_test

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use aquamon::entity::readings;
use aquamon::view::{Metric, to_display_series};

fn reading(hour: u32, minute: u32, temperature: f64, tds: f64, ph: f64) -> readings::Model {
    readings::Model {
        device_id: Uuid::nil(),
        captured_at: Utc
            .with_ymd_and_hms(2026, 8, 29, hour, minute, 0)
            .unwrap()
            .fixed_offset(),
        temperature,
        tds,
        ph,
    }
}

#[test]
fn empty_input_yields_empty_series() {
    let series = to_display_series(&[], Metric::Temperature, chrono_tz::Asia::Jakarta);
    assert_eq!(series.label, "Temperature");
    assert!(series.points.is_empty());
}

#[test]
fn projects_the_chosen_field() {
    let rows = vec![reading(10, 0, 27.5, 412.0, 6.8)];

    assert_eq!(
        to_display_series(&rows, Metric::Temperature, chrono_tz::UTC).points[0].value,
        27.5
    );
    assert_eq!(
        to_display_series(&rows, Metric::Tds, chrono_tz::UTC).points[0].value,
        412.0
    );
    assert_eq!(
        to_display_series(&rows, Metric::Ph, chrono_tz::UTC).points[0].value,
        6.8
    );
}

#[test]
fn labels_render_in_the_display_zone() {
    // 17:30 UTC is 00:30 the next day in Asia/Jakarta (UTC+7)
    let rows = vec![reading(17, 30, 27.5, 412.0, 6.8)];
    let series = to_display_series(&rows, Metric::Temperature, chrono_tz::Asia::Jakarta);

    assert_eq!(series.points[0].t, "30 Aug 00:30:00");
}

#[test]
fn preserves_capture_order() {
    let rows = vec![
        reading(8, 0, 26.0, 400.0, 6.9),
        reading(9, 0, 26.5, 405.0, 6.9),
        reading(10, 0, 27.0, 410.0, 7.0),
    ];
    let series = to_display_series(&rows, Metric::Temperature, chrono_tz::UTC);

    let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![26.0, 26.5, 27.0]);

    let labels: Vec<&str> = series.points.iter().map(|p| p.t.as_str()).collect();
    assert_eq!(
        labels,
        vec!["29 Aug 08:00:00", "29 Aug 09:00:00", "29 Aug 10:00:00"]
    );
}

#[test]
fn projection_is_deterministic() {
    let rows = vec![
        reading(8, 0, 26.0, 400.0, 6.9),
        reading(9, 0, 26.5, 405.0, 6.9),
    ];

    let first = to_display_series(&rows, Metric::Ph, chrono_tz::Asia::Jakarta);
    let second = to_display_series(&rows, Metric::Ph, chrono_tz::Asia::Jakarta);
    assert_eq!(first, second);
}
