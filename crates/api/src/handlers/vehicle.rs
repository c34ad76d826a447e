//! Handlers for vehicle and fare lookups.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use vtpartner_db::models::vehicle::{FareEntry, Vehicle, VehicleWithPrice};
use vtpartner_db::repositories::VehicleRepo;

use super::required_ids;
use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::Listing;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CategoryBody {
    pub category_id: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryCityBody {
    pub category_id: Option<Value>,
    pub city_id: Option<Value>,
}

/// POST /fare_result
///
/// Per-vehicle starting fares for a category in a city, lightest vehicle first.
pub async fn fare_result(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CategoryCityBody>,
) -> AppResult<Json<Listing<FareEntry>>> {
    let [category_id, city_id] = required_ids([
        ("category_id", &body.category_id),
        ("city_id", &body.city_id),
    ])?;

    let fares = VehicleRepo::list_fares(&state.pool, category_id, city_id).await?;
    Ok(Json(Listing::non_empty("fare_result", fares)?))
}

/// POST /all_vehicles
pub async fn all_vehicles(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CategoryBody>,
) -> AppResult<Json<Listing<Vehicle>>> {
    let [category_id] = required_ids([("category_id", &body.category_id)])?;

    let vehicles = VehicleRepo::list_by_category(&state.pool, category_id).await?;
    Ok(Json(Listing::non_empty("vehicle_details", vehicles)?))
}

/// POST /all_vehicles_with_price
///
/// Vehicles of a category that have a price configured for the city.
pub async fn all_vehicles_with_price(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CategoryCityBody>,
) -> AppResult<Json<Listing<VehicleWithPrice>>> {
    let [category_id, city_id] = required_ids([
        ("category_id", &body.category_id),
        ("city_id", &body.city_id),
    ])?;

    let vehicles = VehicleRepo::list_with_price(&state.pool, category_id, city_id).await?;
    Ok(Json(Listing::non_empty("vehicle_details", vehicles)?))
}
