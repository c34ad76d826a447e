//! Handlers for category, city and gallery lookups.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use vtpartner_db::models::category::ServiceCategory;
use vtpartner_db::models::city::AllowedCity;
use vtpartner_db::models::gallery::{
    GalleryImage, DELIVERY_CATEGORY_TYPE_ID, SERVICES_CATEGORY_TYPE_ID,
};
use vtpartner_db::models::other_service::OtherService;
use vtpartner_db::models::sub_category::SubCategory;
use vtpartner_db::repositories::{
    CategoryRepo, CityRepo, GalleryRepo, OtherServiceRepo, SubCategoryRepo,
};

use super::required_ids;
use super::vehicle::CategoryBody;
use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::Listing;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CityBody {
    pub city_id: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubCategoryBody {
    pub sub_cat_id: Option<Value>,
}

/// POST /all_services
///
/// Every service category with its category type.
pub async fn all_services(
    State(state): State<AppState>,
) -> AppResult<Json<Listing<ServiceCategory>>> {
    let categories = CategoryRepo::list_with_type(&state.pool).await?;
    Ok(Json(Listing::non_empty("services_details", categories)?))
}

/// POST /all_allowed_cities
///
/// `city_id` is accepted for compatibility with existing clients but does
/// not filter the list.
pub async fn all_allowed_cities(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CityBody>,
) -> AppResult<Json<Listing<AllowedCity>>> {
    if body.city_id.is_some() {
        tracing::debug!("Ignoring city_id on all_allowed_cities");
    }

    let cities = CityRepo::list_all(&state.pool).await?;
    Ok(Json(Listing::non_empty("cities", cities)?))
}

/// POST /all_sub_categories
pub async fn all_sub_categories(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CategoryBody>,
) -> AppResult<Json<Listing<SubCategory>>> {
    let [category_id] = required_ids([("category_id", &body.category_id)])?;

    let sub_categories = SubCategoryRepo::list_by_category(&state.pool, category_id).await?;
    Ok(Json(Listing::non_empty("sub_categories_details", sub_categories)?))
}

/// POST /all_other_services
pub async fn all_other_services(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SubCategoryBody>,
) -> AppResult<Json<Listing<OtherService>>> {
    let [sub_cat_id] = required_ids([("sub_cat_id", &body.sub_cat_id)])?;

    let services = OtherServiceRepo::list_by_sub_category(&state.pool, sub_cat_id).await?;
    Ok(Json(Listing::non_empty("other_services_details", services)?))
}

/// POST /all_delivery_gallery_images
pub async fn all_delivery_gallery_images(
    State(state): State<AppState>,
) -> AppResult<Json<Listing<GalleryImage>>> {
    let images = GalleryRepo::list_by_category_type(&state.pool, DELIVERY_CATEGORY_TYPE_ID).await?;
    Ok(Json(Listing::non_empty("gallery_data_delivery", images)?))
}

/// POST /all_services_gallery_images
pub async fn all_services_gallery_images(
    State(state): State<AppState>,
) -> AppResult<Json<Listing<GalleryImage>>> {
    let images = GalleryRepo::list_by_category_type(&state.pool, SERVICES_CATEGORY_TYPE_ID).await?;
    Ok(Json(Listing::non_empty("gallery_data_services", images)?))
}
