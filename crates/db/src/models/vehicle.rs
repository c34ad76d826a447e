//! Vehicle rows, with and without city-specific pricing.

use serde::Serialize;
use sqlx::FromRow;
use vtpartner_core::types::DbId;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A vehicle joined with its vehicle type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub vehicle_id: DbId,
    pub vehicle_name: String,
    pub weight: Option<f64>,
    pub vehicle_type_id: DbId,
    pub vehicle_type_name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub size_image: Option<String>,
}

/// A vehicle with the starting per-km price for one city.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VehicleWithPrice {
    pub vehicle_id: DbId,
    pub vehicle_name: String,
    pub weight: Option<f64>,
    pub vehicle_type_id: DbId,
    pub vehicle_type_name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub size_image: Option<String>,
    pub starting_price_per_km: Option<f64>,
}

// ---------------------------------------------------------------------------
// Fare lookup
// ---------------------------------------------------------------------------

/// Per-vehicle fare entry for a category and city.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FareEntry {
    pub vehicle_id: DbId,
    pub vehicle_name: String,
    pub weight: Option<f64>,
    pub size_image: Option<String>,
    pub starting_price_per_km: Option<f64>,
}
