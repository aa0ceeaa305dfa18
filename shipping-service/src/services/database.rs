use crate::models::Shipment;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

/// MongoDB client for the shipping service.
///
/// Constructed once at startup and injected into handlers through the
/// application state; dropping the last clone closes the connection pool.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    /// Unique index on `trackingId`. This is what makes a tracking id
    /// identify exactly one shipment; a generated-id collision is rejected
    /// here as a write error rather than retried.
    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for shipping-service");

        let tracking_index = IndexModel::builder()
            .keys(doc! { "trackingId": 1 })
            .options(
                IndexOptions::builder()
                    .name("tracking_id_unique".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.shipments()
            .create_index(tracking_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create unique trackingId index on shipments collection: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created unique index on shipments.trackingId");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Persist a new shipment. A duplicate `trackingId` violates the unique
    /// index and surfaces as a database error.
    pub async fn insert_shipment(&self, shipment: &Shipment) -> Result<(), AppError> {
        self.shipments()
            .insert_one(shipment, None)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    pub async fn find_by_tracking_id(
        &self,
        tracking_id: &str,
    ) -> Result<Option<Shipment>, AppError> {
        self.shipments()
            .find_one(doc! { "trackingId": tracking_id }, None)
            .await
            .map_err(AppError::from)
    }

    pub fn shipments(&self) -> Collection<Shipment> {
        self.db.collection("shipments")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
