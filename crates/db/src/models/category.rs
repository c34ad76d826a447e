use serde::Serialize;
use sqlx::FromRow;
use vtpartner_core::types::DbId;

/// A service category joined with its category type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceCategory {
    pub category_id: DbId,
    pub category_name: String,
    pub category_type_id: DbId,
    pub category_image: Option<String>,
    pub category_type: String,
    pub epoch: Option<f64>,
    pub description: Option<String>,
}
