use axum::http::StatusCode;

/// Liveness probe
///
/// Returns 200 OK whenever the process is serving requests. Does not touch
/// the store or the status tracker.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "health"
)]
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
