use sqlx::PgPool;
use vtpartner_core::types::DbId;

use crate::models::other_service::OtherService;

pub struct OtherServiceRepo;

impl OtherServiceRepo {
    /// Services listed under a sub-category.
    pub async fn list_by_sub_category(
        pool: &PgPool,
        sub_cat_id: DbId,
    ) -> Result<Vec<OtherService>, sqlx::Error> {
        sqlx::query_as::<_, OtherService>(
            "SELECT service_id, service_name, sub_cat_id, service_image, time_updated
             FROM vtpartner.other_servicestbl
             WHERE sub_cat_id = $1
             ORDER BY sub_cat_id DESC",
        )
        .bind(sub_cat_id)
        .fetch_all(pool)
        .await
    }
}
