use std::sync::Arc;

use vtpartner_maps::DistanceMatrixClient;

use crate::config::ServerConfig;
use crate::upload::UploadRelocator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vtpartner_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Stages and publishes uploaded images.
    pub uploads: Arc<UploadRelocator>,
    /// Outbound client for the `/distance` proxy.
    pub distance_client: Arc<DistanceMatrixClient>,
}

impl AppState {
    /// Assemble state from a pool and loaded configuration.
    pub fn new(
        pool: vtpartner_db::DbPool,
        config: ServerConfig,
    ) -> Result<Self, vtpartner_maps::DistanceMatrixError> {
        let distance_client =
            DistanceMatrixClient::new(config.distance_matrix_url.clone(), config.maps.clone())?;
        let uploads = UploadRelocator::new(&config.uploads);

        Ok(Self {
            pool,
            config: Arc::new(config),
            uploads: Arc::new(uploads),
            distance_client: Arc::new(distance_client),
        })
    }
}
