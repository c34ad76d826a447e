//! Repository for `vtpartner.service_gallerytbl`.

use sqlx::PgPool;
use vtpartner_core::types::DbId;

use crate::models::gallery::GalleryImage;

pub struct GalleryRepo;

impl GalleryRepo {
    /// Gallery images of one category type, ascending by `gallery_id`.
    ///
    /// See [`DELIVERY_CATEGORY_TYPE_ID`](crate::models::gallery::DELIVERY_CATEGORY_TYPE_ID)
    /// and [`SERVICES_CATEGORY_TYPE_ID`](crate::models::gallery::SERVICES_CATEGORY_TYPE_ID).
    pub async fn list_by_category_type(
        pool: &PgPool,
        category_type_id: DbId,
    ) -> Result<Vec<GalleryImage>, sqlx::Error> {
        sqlx::query_as::<_, GalleryImage>(
            "SELECT gallery_id, image_url, category_type, epoch
             FROM vtpartner.service_gallerytbl, vtpartner.category_type_tbl
             WHERE service_gallerytbl.category_type_id = category_type_tbl.cat_type_id
               AND service_gallerytbl.category_type_id = $1
             ORDER BY gallery_id ASC",
        )
        .bind(category_type_id)
        .fetch_all(pool)
        .await
    }
}
