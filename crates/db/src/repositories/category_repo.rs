//! Repository for `vtpartner.categorytbl` joined with its category types.

use sqlx::PgPool;

use crate::models::category::ServiceCategory;

pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories with their type name, ascending by `category_id`.
    pub async fn list_with_type(pool: &PgPool) -> Result<Vec<ServiceCategory>, sqlx::Error> {
        sqlx::query_as::<_, ServiceCategory>(
            "SELECT category_id, category_name, category_type_id, category_image,
                    category_type, epoch, description
             FROM vtpartner.categorytbl, vtpartner.category_type_tbl
             WHERE category_type_tbl.cat_type_id = categorytbl.category_type_id
             ORDER BY category_id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
