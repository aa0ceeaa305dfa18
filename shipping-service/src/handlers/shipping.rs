use crate::dtos::{
    CreateShipmentRequest, RateRequest, RateResponse, ShipmentResponse, TrackShipmentResponse,
};
use crate::models::Shipment;
use crate::services::rates;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use metrics::counter;
use service_core::{error::AppError, extract::ValidatedJson};

/// Quote a shipping rate without creating anything
#[utoipa::path(
    post,
    path = "/shipping/rate",
    request_body = RateRequest,
    responses(
        (status = 200, description = "Estimated shipping charge", body = RateResponse),
        (status = 400, description = "Missing or invalid fields")
    ),
    tag = "Shipping"
)]
pub async fn calculate_rate(
    ValidatedJson(req): ValidatedJson<RateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let estimated_charge = rates::quote_charge(&req.origin, &req.destination, req.weight);
    counter!("rate_quotes_total").increment(1);

    Ok(Json(RateResponse { estimated_charge }))
}

/// Create a new shipment
#[utoipa::path(
    post,
    path = "/shipping/create",
    request_body = CreateShipmentRequest,
    responses(
        (status = 201, description = "Shipment created", body = ShipmentResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Persistence failure")
    ),
    tag = "Shipping"
)]
pub async fn create_shipment(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateShipmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let charge = rates::quote_charge(&req.origin, &req.destination, req.weight);
    let shipment = Shipment::new(
        req.sender,
        req.receiver,
        req.origin,
        req.destination,
        req.weight,
        charge,
    );

    state.db.insert_shipment(&shipment).await?;

    tracing::info!(
        tracking_id = %shipment.tracking_id,
        charge = %shipment.charge,
        "Shipment created"
    );
    counter!("shipments_created_total").increment(1);

    Ok((StatusCode::CREATED, Json(ShipmentResponse::from(shipment))))
}

/// Track a shipment by tracking id
#[utoipa::path(
    get,
    path = "/shipping/track/{tracking_id}",
    params(
        ("tracking_id" = String, Path, description = "The shipment tracking id", example = "TRK-a1b2c3d4")
    ),
    responses(
        (status = 200, description = "Shipment details", body = TrackShipmentResponse),
        (status = 404, description = "No shipment with that tracking id"),
        (status = 500, description = "Lookup failure")
    ),
    tag = "Shipping"
)]
pub async fn track_shipment(
    State(state): State<AppState>,
    Path(tracking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let shipment = state
        .db
        .find_by_tracking_id(&tracking_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Shipment not found")))?;

    counter!("tracking_lookups_total").increment(1);

    Ok(Json(TrackShipmentResponse::from(shipment)))
}
