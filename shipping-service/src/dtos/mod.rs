pub mod shipping;

pub use shipping::{
    CreateShipmentRequest, RateRequest, RateResponse, ShipmentResponse, TrackShipmentResponse,
};
