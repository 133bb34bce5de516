use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::status::LiveStatus;
use crate::store;
use crate::view::{DisplaySeries, Metric, to_display_series};
use crate::window::{TimeWindow, WindowMode};

#[derive(Debug, Deserialize, IntoParams)]
pub struct TelemetryQuery {
    /// Restrict to one device (UUID); omit to span all devices
    pub device_id: Option<String>,
}

/// Parse the optional `device_id` query field.
///
/// Parsed by hand rather than typed as `Uuid` in the extractor, so a bad
/// value gets the same JSON error body as every other rejection instead of
/// axum's plain-text one.
pub fn parse_device_id(raw: Option<&str>) -> AppResult<Option<Uuid>> {
    raw.map(|s| {
        s.parse::<Uuid>()
            .map_err(|_| AppError::BadRequest(format!("invalid device_id '{s}' (expected a UUID)")))
    })
    .transpose()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TelemetryResponse {
    pub mode: WindowMode,
    pub window: TimeWindow,
    /// Device connectivity at the time of the request
    pub status: LiveStatus,
    /// False when the store could not serve the window; series are then empty
    pub data_available: bool,
    /// One series per metric: temperature, TDS, pH
    pub series: Vec<DisplaySeries>,
}

/// Get chart-ready telemetry for one time window
///
/// Resolves the window mode against the current time, fetches readings in
/// `[start, end)`, and projects them into one display series per metric. A
/// transient store failure degrades to an empty-series response with
/// `data_available: false` rather than an error status, so the dashboard can
/// render a "data unavailable" indicator.
#[utoipa::path(
    get,
    path = "/api/telemetry/{mode}",
    params(
        ("mode" = String, Path, description = "Window mode: 24hours, 2days, 3days, or 1week"),
        TelemetryQuery
    ),
    responses(
        (status = 200, description = "Telemetry retrieved successfully", body = TelemetryResponse),
        (status = 400, description = "Unknown window mode or invalid device_id"),
    ),
    tag = "telemetry"
)]
pub async fn get_telemetry(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Query(query): Query<TelemetryQuery>,
) -> AppResult<Json<TelemetryResponse>> {
    let mode: WindowMode = mode.parse()?;
    let device_id = parse_device_id(query.device_id.as_deref())?;
    let now = Utc::now();
    let window = mode.resolve(now);

    let timeout = Duration::from_secs(state.config.fetch_timeout_seconds);
    let (readings, data_available) =
        match store::fetch_readings(&state.db, device_id, &window, timeout).await {
            Ok(rows) => (rows, true),
            Err(e @ (AppError::StoreUnavailable(_) | AppError::Timeout(_))) => {
                tracing::warn!(
                    error = %e,
                    mode = mode.as_str(),
                    "Telemetry fetch failed, degrading to empty series"
                );
                (Vec::new(), false)
            }
            Err(e) => return Err(e),
        };

    let tz = state.config.display_timezone;
    let series = Metric::ALL
        .iter()
        .map(|&metric| to_display_series(&readings, metric, tz))
        .collect();

    Ok(Json(TelemetryResponse {
        mode,
        window,
        status: state.device_status.status_at(now),
        data_available,
        series,
    }))
}
