use serde::Serialize;
use sqlx::FromRow;
use vtpartner_core::types::DbId;

/// A service offered under a sub-category.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OtherService {
    pub service_id: DbId,
    pub service_name: String,
    pub sub_cat_id: DbId,
    pub service_image: Option<String>,
    pub time_updated: Option<f64>,
}
