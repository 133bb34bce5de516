use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::AppState;
use crate::status::{DeviceStatusSnapshot, LiveStatus};

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Three-valued connectivity derived from the snapshot's age
    pub status: LiveStatus,
    /// Raw last-known device state, including health flags
    pub snapshot: DeviceStatusSnapshot,
}

/// Get the current device connectivity status
///
/// Reads the snapshot maintained by the MQTT listener. `stale` means the last
/// message is older than the configured threshold, which is distinct from a
/// confirmed OFF.
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Status retrieved successfully", body = StatusResponse),
    ),
    tag = "status"
)]
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: state.device_status.status_at(Utc::now()),
        snapshot: state.device_status.snapshot(),
    })
}
