pub mod dashboard;
pub mod health;
pub mod status;
pub mod telemetry;

use axum::{Router, routing::get};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        telemetry::get_telemetry,
        status::get_status,
    ),
    components(
        schemas(
            telemetry::TelemetryResponse,
            status::StatusResponse,
            crate::view::DisplaySeries,
            crate::view::DisplayPoint,
            crate::view::Metric,
            crate::window::TimeWindow,
            crate::window::WindowMode,
            crate::status::LiveStatus,
            crate::status::DeviceStatusSnapshot,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "telemetry", description = "Windowed sensor readings as chart series"),
        (name = "status", description = "Live device connectivity"),
    ),
    info(
        title = "Aquamon API",
        description = "Time-windowed telemetry query and live device status API",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/telemetry/{mode}", get(telemetry::get_telemetry))
        .route("/status", get(status::get_status))
        .layer(RequestBodyLimitLayer::new(1024 * 1024)); // 1MB body limit

    // Health check and dashboard routes
    let health_routes = Router::new().route("/healthz", get(health::healthz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .route("/", get(dashboard::dashboard))
        .nest("/api", api_routes)
        .merge(health_routes)
        .merge(docs_routes)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
