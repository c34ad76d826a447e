use serde::Serialize;
use sqlx::FromRow;
use vtpartner_core::types::DbId;

/// A city the marketplace operates in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AllowedCity {
    pub city_id: DbId,
    pub city_name: String,
    pub pincode: Option<String>,
    pub bg_image: Option<String>,
    pub time: Option<f64>,
    pub pincode_until: Option<String>,
    pub description: Option<String>,
    pub status: Option<i32>,
    pub covered_distance: Option<f64>,
}
