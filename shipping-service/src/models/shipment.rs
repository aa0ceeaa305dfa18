use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Delivery state of a shipment.
///
/// Set to `Booked` at creation; no operation in this service transitions it
/// afterwards. The wire strings match the legacy collection contents, so
/// `InTransit` serializes with a space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum ShipmentStatus {
    Booked,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
}

/// A shipment document in the `shipments` collection.
///
/// `tracking_id` is the external-facing key and carries a unique index;
/// `charge` is computed once at creation and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(rename = "_id")]
    pub id: String,
    pub tracking_id: String,
    pub sender: String,
    pub receiver: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub charge: f64,
    pub status: ShipmentStatus,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Shipment {
    pub fn new(
        sender: String,
        receiver: String,
        origin: String,
        destination: String,
        weight: f64,
        charge: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            tracking_id: Self::generate_tracking_id(),
            sender,
            receiver,
            origin,
            destination,
            weight,
            charge,
            status: ShipmentStatus::Booked,
            created_at: now,
            updated_at: now,
        }
    }

    /// `TRK-` followed by the first 8 characters of a fresh UUID v4.
    /// Uniqueness comes from the random suffix, not the shipment contents;
    /// the store's unique index is the backstop for a collision.
    pub fn generate_tracking_id() -> String {
        let uuid = Uuid::new_v4().to_string();
        format!("TRK-{}", &uuid[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_id_has_expected_shape() {
        let tracking_id = Shipment::generate_tracking_id();
        assert!(tracking_id.starts_with("TRK-"));
        assert_eq!(tracking_id.len(), "TRK-".len() + 8);
    }

    #[test]
    fn tracking_ids_are_random() {
        let a = Shipment::generate_tracking_id();
        let b = Shipment::generate_tracking_id();
        assert_ne!(a, b);
    }

    #[test]
    fn status_uses_legacy_wire_strings() {
        assert_eq!(
            serde_json::to_value(ShipmentStatus::Booked).unwrap(),
            "Booked"
        );
        assert_eq!(
            serde_json::to_value(ShipmentStatus::InTransit).unwrap(),
            "In Transit"
        );
        assert_eq!(
            serde_json::to_value(ShipmentStatus::Delivered).unwrap(),
            "Delivered"
        );
    }

    #[test]
    fn new_shipment_defaults_to_booked() {
        let shipment = Shipment::new(
            "John Doe".into(),
            "Jane Smith".into(),
            "New York".into(),
            "Los Angeles".into(),
            5.0,
            160.0,
        );
        assert_eq!(shipment.status, ShipmentStatus::Booked);
        assert_eq!(shipment.created_at, shipment.updated_at);
    }
}
