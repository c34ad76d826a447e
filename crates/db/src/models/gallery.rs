use serde::Serialize;
use sqlx::FromRow;
use vtpartner_core::types::DbId;

/// Category type of the delivery showcase images.
pub const DELIVERY_CATEGORY_TYPE_ID: DbId = 1;

/// Category type of the services showcase images.
pub const SERVICES_CATEGORY_TYPE_ID: DbId = 2;

/// A promotional gallery image tagged with its category type name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryImage {
    pub gallery_id: DbId,
    pub image_url: String,
    pub category_type: String,
    pub epoch: Option<f64>,
}
