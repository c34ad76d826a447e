use serde::Serialize;
use sqlx::FromRow;
use vtpartner_core::types::DbId;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubCategory {
    pub sub_cat_id: DbId,
    pub sub_cat_name: String,
    pub cat_id: DbId,
    pub image: Option<String>,
    pub epoch_time: Option<f64>,
}
