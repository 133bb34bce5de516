//! Unit tests for the telemetry store accessor, against a mock database.
//!
//! Run with: cargo test --test store_unit_test

use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::Uuid;

use aquamon::entity::readings;
use aquamon::error::AppError;
use aquamon::store::fetch_readings;
use aquamon::window::{TimeWindow, WindowMode};

const TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

fn reading(captured_at: DateTime<Utc>) -> readings::Model {
    readings::Model {
        device_id: Uuid::nil(),
        captured_at: captured_at.fixed_offset(),
        temperature: 26.5,
        tds: 410.0,
        ph: 6.9,
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
}

/// Debug-render a logged transaction with the SQL's escaped quotes undone,
/// so assertions can match the statement text as written.
fn issued_sql(transaction: &sea_orm::Transaction) -> String {
    format!("{transaction:?}").replace('\\', "")
}

#[tokio::test]
async fn inverted_window_is_rejected_before_querying() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let t = now();
    let window = TimeWindow {
        start: t,
        end: t - Duration::hours(1),
    };

    let err = fetch_readings(&db, None, &window, TIMEOUT)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn empty_window_is_rejected_before_querying() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let t = now();
    let window = TimeWindow { start: t, end: t };

    let err = fetch_readings(&db, None, &window, TIMEOUT)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn returns_window_readings_in_capture_order() {
    let t = now();
    // Store contents for the 24h window ending at t: readings 20h, 10h, and
    // 1h back; a reading 25h back falls outside [start, end) and is filtered
    // out by the store's own bounds.
    let in_window = vec![
        reading(t - Duration::hours(20)),
        reading(t - Duration::hours(10)),
        reading(t - Duration::hours(1)),
    ];

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([in_window.clone()])
        .into_connection();

    let window = WindowMode::Hours24.resolve(t);
    let rows = fetch_readings(&db, None, &window, TIMEOUT).await.unwrap();

    assert_eq!(rows, in_window);
    assert!(
        rows.windows(2)
            .all(|pair| pair[0].captured_at <= pair[1].captured_at)
    );

    // The issued query carries the half-open bounds and ascending order
    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
    let issued = issued_sql(&log[0]);
    assert!(issued.contains(r#""captured_at" >= $1"#), "{issued}");
    assert!(issued.contains(r#""captured_at" < $2"#), "{issued}");
    assert!(
        issued.contains(r#"ORDER BY "readings"."captured_at" ASC"#),
        "{issued}"
    );
}

#[tokio::test]
async fn empty_result_is_not_an_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<readings::Model>::new()])
        .into_connection();

    let window = WindowMode::Week1.resolve(now());
    let rows = fetch_readings(&db, None, &window, TIMEOUT).await.unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn device_filter_narrows_the_query() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<readings::Model>::new()])
        .into_connection();

    let device = Uuid::new_v4();
    let window = WindowMode::Hours24.resolve(now());
    fetch_readings(&db, Some(device), &window, TIMEOUT)
        .await
        .unwrap();

    let issued = issued_sql(&db.into_transaction_log()[0]);
    assert!(issued.contains(r#""device_id" = $3"#), "{issued}");
}
