pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::middleware::{
    metrics::metrics_middleware, tracing::request_id_middleware,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ShippingConfig;
use crate::services::MongoDb;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shipping & Delivery API",
        description = "API for managing shipments, calculating rates, and tracking deliveries"
    ),
    paths(
        handlers::shipping::calculate_rate,
        handlers::shipping::create_shipment,
        handlers::shipping::track_shipment,
        handlers::health::health_check,
    ),
    components(schemas(
        dtos::RateRequest,
        dtos::RateResponse,
        dtos::CreateShipmentRequest,
        dtos::ShipmentResponse,
        dtos::TrackShipmentResponse,
        models::ShipmentStatus,
    )),
    tags(
        (name = "Shipping", description = "Rate quotes, shipment creation, and tracking"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: ShippingConfig,
    pub db: MongoDb,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics::metrics))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/shipping/rate", post(handlers::calculate_rate))
        .route("/shipping/create", post(handlers::create_shipment))
        .route("/shipping/track/:tracking_id", get(handlers::track_shipment))
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
