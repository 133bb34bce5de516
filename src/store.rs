//! Telemetry store accessor.
//!
//! A pure query layer over the `readings` table: no long-lived state, no
//! internal retries. Transient store failures and deadline overruns surface to
//! the caller, who owns the retry policy.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::time::Duration;
use uuid::Uuid;

use crate::entity::readings;
use crate::error::{AppError, AppResult};
use crate::window::TimeWindow;

/// Fetch all readings with `captured_at` in `[window.start, window.end)`,
/// ascending by capture time. An empty result is not an error.
///
/// `device_id` narrows the query to a single device; `None` spans all devices.
///
/// # Errors
///
/// - `AppError::BadRequest` if the window is empty or inverted.
/// - `AppError::Timeout` if the query exceeds `timeout`.
/// - `AppError::StoreUnavailable` if the store cannot be reached.
pub async fn fetch_readings(
    db: &DatabaseConnection,
    device_id: Option<Uuid>,
    window: &TimeWindow,
    timeout: Duration,
) -> AppResult<Vec<readings::Model>> {
    // Window fields are public for serialization, so a caller can build an
    // inverted interval literally; re-assert the invariant through the one
    // validation point before touching the store.
    TimeWindow::new(window.start, window.end)?;

    let mut query = readings::Entity::find()
        .filter(readings::Column::CapturedAt.gte(window.start))
        .filter(readings::Column::CapturedAt.lt(window.end));

    if let Some(id) = device_id {
        query = query.filter(readings::Column::DeviceId.eq(id));
    }

    let rows = tokio::time::timeout(
        timeout,
        query.order_by_asc(readings::Column::CapturedAt).all(db),
    )
    .await
    .map_err(|_| {
        AppError::Timeout(format!(
            "readings fetch exceeded {}s deadline",
            timeout.as_secs()
        ))
    })??;

    Ok(rows)
}
