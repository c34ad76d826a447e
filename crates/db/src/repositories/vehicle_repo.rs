//! Repository for `vtpartner.vehiclestbl` and its pricing/type tables.

use sqlx::PgPool;
use vtpartner_core::types::DbId;

use crate::models::vehicle::{FareEntry, Vehicle, VehicleWithPrice};

pub struct VehicleRepo;

impl VehicleRepo {
    /// Vehicles of a category with their type, newest id first.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Vehicle>, sqlx::Error> {
        sqlx::query_as::<_, Vehicle>(
            "SELECT vehicle_id, vehicle_name, weight,
                    vehicle_types_tbl.vehicle_type_id, vehicle_types_tbl.vehicle_type_name,
                    description, image, size_image
             FROM vtpartner.vehiclestbl, vtpartner.vehicle_types_tbl
             WHERE vehiclestbl.vehicle_type_id = vehicle_types_tbl.vehicle_type_id
               AND category_id = $1
             ORDER BY vehicle_id DESC",
        )
        .bind(category_id)
        .fetch_all(pool)
        .await
    }

    /// Vehicles of a category priced for a city, newest id first.
    ///
    /// Vehicles without a price row for the city are excluded.
    pub async fn list_with_price(
        pool: &PgPool,
        category_id: DbId,
        city_id: DbId,
    ) -> Result<Vec<VehicleWithPrice>, sqlx::Error> {
        sqlx::query_as::<_, VehicleWithPrice>(
            "SELECT v.vehicle_id, v.vehicle_name, v.weight,
                    vt.vehicle_type_id, vt.vehicle_type_name,
                    v.description, v.image, v.size_image,
                    vc.starting_price_per_km
             FROM vtpartner.vehiclestbl v
             JOIN vtpartner.vehicle_types_tbl vt ON v.vehicle_type_id = vt.vehicle_type_id
             LEFT JOIN vtpartner.vehicle_city_wise_price_tbl vc ON v.vehicle_id = vc.vehicle_id
             WHERE v.category_id = $1 AND vc.city_id = $2
             ORDER BY v.vehicle_id DESC",
        )
        .bind(category_id)
        .bind(city_id)
        .fetch_all(pool)
        .await
    }

    /// Fare entries for a category and city, lightest vehicle first.
    pub async fn list_fares(
        pool: &PgPool,
        category_id: DbId,
        city_id: DbId,
    ) -> Result<Vec<FareEntry>, sqlx::Error> {
        sqlx::query_as::<_, FareEntry>(
            "SELECT vehiclestbl.vehicle_id, vehicle_name, weight, size_image, starting_price_per_km
             FROM vtpartner.vehicle_city_wise_price_tbl, vtpartner.vehiclestbl
             WHERE vehicle_city_wise_price_tbl.vehicle_id = vehiclestbl.vehicle_id
               AND category_id = $1 AND city_id = $2
             ORDER BY weight ASC",
        )
        .bind(category_id)
        .bind(city_id)
        .fetch_all(pool)
        .await
    }
}
