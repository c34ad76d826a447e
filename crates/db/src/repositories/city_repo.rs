use sqlx::PgPool;

use crate::models::city::AllowedCity;

/// Read access to `vtpartner.available_citys_tbl`.
pub struct CityRepo;

impl CityRepo {
    /// Every city, ascending by `city_id`.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<AllowedCity>, sqlx::Error> {
        sqlx::query_as::<_, AllowedCity>(
            "SELECT city_id, city_name, pincode, bg_image, time, pincode_until,
                    description, status, covered_distance
             FROM vtpartner.available_citys_tbl
             ORDER BY city_id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
