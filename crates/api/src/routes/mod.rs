pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use vtpartner_core::upload::UPLOADS_SEGMENT;

use crate::handlers;
use crate::state::AppState;
use crate::upload::UploadRelocator;

/// Room left in the request body limit for multipart boundaries and
/// headers around the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the website route tree (mounted under the configured API prefix).
///
/// ```text
/// POST /upload                        multipart image upload
/// GET  /uploads/{file}                uploaded images
/// POST /fare_result                   fares for category + city
/// POST /all_services                  categories
/// POST /all_allowed_cities            cities
/// POST /all_vehicles                  vehicles for category
/// POST /all_vehicles_with_price       vehicles priced for category + city
/// POST /all_sub_categories            sub-categories for category
/// POST /all_other_services            services for sub-category
/// POST /all_delivery_gallery_images   delivery gallery
/// POST /all_services_gallery_images   services gallery
/// POST /add_new_enquiry               enquiry submission
/// GET  /distance                      Distance Matrix proxy
/// ```
pub fn website_routes(uploads: &UploadRelocator) -> Router<AppState> {
    let body_limit = usize::try_from(uploads.max_file_bytes())
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route(
            "/upload",
            post(handlers::upload::upload_image).layer(DefaultBodyLimit::max(body_limit)),
        )
        .nest_service(
            &format!("/{UPLOADS_SEGMENT}"),
            ServeDir::new(uploads.public_dir()),
        )
        .route("/fare_result", post(handlers::vehicle::fare_result))
        .route("/all_services", post(handlers::catalog::all_services))
        .route("/all_allowed_cities", post(handlers::catalog::all_allowed_cities))
        .route("/all_vehicles", post(handlers::vehicle::all_vehicles))
        .route(
            "/all_vehicles_with_price",
            post(handlers::vehicle::all_vehicles_with_price),
        )
        .route("/all_sub_categories", post(handlers::catalog::all_sub_categories))
        .route("/all_other_services", post(handlers::catalog::all_other_services))
        .route(
            "/all_delivery_gallery_images",
            post(handlers::catalog::all_delivery_gallery_images),
        )
        .route(
            "/all_services_gallery_images",
            post(handlers::catalog::all_services_gallery_images),
        )
        .route("/add_new_enquiry", post(handlers::enquiry::add_new_enquiry))
        .route("/distance", get(handlers::distance::distance))
}
