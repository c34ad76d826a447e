use sqlx::PgPool;
use vtpartner_core::types::DbId;

use crate::models::sub_category::SubCategory;

pub struct SubCategoryRepo;

impl SubCategoryRepo {
    /// Sub-categories of a category, newest id first.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<SubCategory>, sqlx::Error> {
        sqlx::query_as::<_, SubCategory>(
            "SELECT sub_cat_id, sub_cat_name, cat_id, image, epoch_time
             FROM vtpartner.sub_categorytbl
             WHERE cat_id = $1
             ORDER BY sub_cat_id DESC",
        )
        .bind(category_id)
        .fetch_all(pool)
        .await
    }
}
