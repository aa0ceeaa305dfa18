pub mod health;
pub mod metrics;
pub mod shipping;

pub use health::{health_check, readiness_check};
pub use shipping::{calculate_rate, create_shipment, track_shipment};
