use crate::models::{Shipment, ShipmentStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RateRequest {
    #[validate(length(min = 1, message = "origin is required"))]
    #[schema(example = "New York")]
    pub origin: String,

    #[validate(length(min = 1, message = "destination is required"))]
    #[schema(example = "Los Angeles")]
    pub destination: String,

    /// Zero weight is rejected the same as a missing weight. The legacy
    /// service could not tell the two apart and we keep that contract.
    #[validate(range(exclusive_min = 0.0, message = "weight must be greater than zero"))]
    #[schema(example = 5)]
    pub weight: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RateResponse {
    #[schema(example = 160)]
    pub estimated_charge: f64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateShipmentRequest {
    #[validate(length(min = 1, message = "sender is required"))]
    #[schema(example = "John Doe")]
    pub sender: String,

    #[validate(length(min = 1, message = "receiver is required"))]
    #[schema(example = "Jane Smith")]
    pub receiver: String,

    #[validate(length(min = 1, message = "origin is required"))]
    #[schema(example = "New York")]
    pub origin: String,

    #[validate(length(min = 1, message = "destination is required"))]
    #[schema(example = "Los Angeles")]
    pub destination: String,

    #[validate(range(exclusive_min = 0.0, message = "weight must be greater than zero"))]
    #[schema(example = 5)]
    pub weight: f64,
}

/// The full persisted record, returned on creation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentResponse {
    pub id: String,
    #[schema(example = "TRK-a1b2c3d4")]
    pub tracking_id: String,
    pub sender: String,
    pub receiver: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub charge: f64,
    pub status: ShipmentStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Shipment> for ShipmentResponse {
    fn from(shipment: Shipment) -> Self {
        Self {
            id: shipment.id,
            tracking_id: shipment.tracking_id,
            sender: shipment.sender,
            receiver: shipment.receiver,
            origin: shipment.origin,
            destination: shipment.destination,
            weight: shipment.weight,
            charge: shipment.charge,
            status: shipment.status,
            created_at: shipment.created_at.to_rfc3339(),
            updated_at: shipment.updated_at.to_rfc3339(),
        }
    }
}

/// Tracking projection. `weight` is deliberately not part of it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackShipmentResponse {
    #[schema(example = "TRK-a1b2c3d4")]
    pub tracking_id: String,
    pub status: ShipmentStatus,
    pub sender: String,
    pub receiver: String,
    pub origin: String,
    pub destination: String,
    pub charge: f64,
    pub created_at: String,
}

impl From<Shipment> for TrackShipmentResponse {
    fn from(shipment: Shipment) -> Self {
        Self {
            tracking_id: shipment.tracking_id,
            status: shipment.status,
            sender: shipment.sender,
            receiver: shipment.receiver,
            origin: shipment.origin,
            destination: shipment.destination,
            charge: shipment.charge,
            created_at: shipment.created_at.to_rfc3339(),
        }
    }
}
