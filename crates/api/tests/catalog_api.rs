//! HTTP-level integration tests for the catalog and fare lookups.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.
//! Each test seeds the shared catalog fixture into a fresh database.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_empty, post_json, post_raw, seed_catalog, website, TestApp};
use serde_json::json;
use sqlx::PgPool;

const MIGRATIONS: &str = "../db/migrations";

fn ids(json: &serde_json::Value, key: &str, id_field: &str) -> Vec<i64> {
    json[key]
        .as_array()
        .unwrap_or_else(|| panic!("{key} should be an array"))
        .iter()
        .map(|row| row[id_field].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// fare_result
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn fare_result_lists_fares_by_weight(pool: PgPool) {
    seed_catalog(&pool).await;
    let app = TestApp::new(pool);

    let response = post_json(
        app.app(),
        &website("/fare_result"),
        json!({"category_id": 1, "city_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json, "fare_result", "vehicle_id"), vec![1, 2, 3]);

    let first = json["fare_result"][0].as_object().unwrap();
    let mut keys: Vec<&str> = first.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "size_image",
            "starting_price_per_km",
            "vehicle_id",
            "vehicle_name",
            "weight"
        ]
    );
    assert_eq!(first["starting_price_per_km"], 10.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn fare_result_accepts_string_ids(pool: PgPool) {
    seed_catalog(&pool).await;
    let app = TestApp::new(pool);

    let response = post_json(
        app.app(),
        &website("/fare_result"),
        json!({"category_id": "1", "city_id": "2"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json, "fare_result", "vehicle_id"), vec![1]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn fare_result_missing_fields_listed_in_order(pool: PgPool) {
    let app = TestApp::new(pool);

    let response = post_json(app.app(), &website("/fare_result"), json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Missing required fields: category_id, city_id"})
    );

    let response = post_json(
        app.app(),
        &website("/fare_result"),
        json!({"category_id": 1, "city_id": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Missing required fields: city_id"
    );

    let response = post_json(
        app.app(),
        &website("/fare_result"),
        json!({"category_id": null, "city_id": 1}),
    )
    .await;
    assert_eq!(
        body_json(response).await["message"],
        "Missing required fields: category_id"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn fare_result_without_body_reports_missing_fields(pool: PgPool) {
    let app = TestApp::new(pool);

    let response = post_empty(app.app(), &website("/fare_result")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Missing required fields: category_id, city_id"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn zero_id_is_not_missing(pool: PgPool) {
    seed_catalog(&pool).await;
    let app = TestApp::new(pool);

    let response = post_json(
        app.app(),
        &website("/fare_result"),
        json!({"category_id": 0, "city_id": 1}),
    )
    .await;

    // Reaches the query (no category 0) instead of failing validation.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"message": "No Data Found"}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_numeric_id_is_rejected(pool: PgPool) {
    let app = TestApp::new(pool);

    let response = post_json(
        app.app(),
        &website("/fare_result"),
        json!({"category_id": "goods", "city_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Invalid value for field category_id"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_json_is_rejected(pool: PgPool) {
    let app = TestApp::new(pool);

    let response = post_raw(
        app.app(),
        &website("/fare_result"),
        "application/json",
        b"{\"category_id\": ".to_vec(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn oversized_json_body_is_413() {
    let app = TestApp::new(common::lazy_pool());
    // Past axum's default 2 MiB request body limit.
    let padding = "x".repeat(2 * 1024 * 1024);
    let body = format!(r#"{{"category_id": 1, "city_id": 1, "note": "{padding}"}}"#);

    let response = post_raw(
        app.app(),
        &website("/fare_result"),
        "application/json",
        body.into_bytes(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Request body too large"})
    );
}

// ---------------------------------------------------------------------------
// all_services / all_allowed_cities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn all_services_ascending(pool: PgPool) {
    seed_catalog(&pool).await;
    let app = TestApp::new(pool);

    let response = post_empty(app.app(), &website("/all_services")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json, "services_details", "category_id"), vec![1, 2, 3, 4]);
    assert_eq!(json["services_details"][0]["category_type"], "Delivery");
    assert_eq!(
        json["services_details"][0]["description"],
        "Move goods across town"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn all_services_empty_is_not_found(pool: PgPool) {
    let app = TestApp::new(pool);

    let response = post_json(app.app(), &website("/all_services"), json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"message": "No Data Found"}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn all_allowed_cities_ignores_city_id(pool: PgPool) {
    seed_catalog(&pool).await;
    let app = TestApp::new(pool);

    let response = post_json(app.app(), &website("/all_allowed_cities"), json!({"city_id": 2})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&body_json(response).await, "cities", "city_id"), vec![1, 2]);

    let response = post_empty(app.app(), &website("/all_allowed_cities")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&body_json(response).await, "cities", "city_id"), vec![1, 2]);
}

// ---------------------------------------------------------------------------
// Vehicles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn all_vehicles_newest_first(pool: PgPool) {
    seed_catalog(&pool).await;
    let app = TestApp::new(pool);

    let response = post_json(app.app(), &website("/all_vehicles"), json!({"category_id": 1})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json, "vehicle_details", "vehicle_id"), vec![3, 2, 1]);
    assert_eq!(json["vehicle_details"][0]["vehicle_type_name"], "Truck");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn all_vehicles_requires_category(pool: PgPool) {
    let app = TestApp::new(pool);

    let response = post_json(app.app(), &website("/all_vehicles"), json!({"city_id": 1})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Missing required fields: category_id"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn all_vehicles_with_price_for_city(pool: PgPool) {
    seed_catalog(&pool).await;
    let app = TestApp::new(pool);

    let response = post_json(
        app.app(),
        &website("/all_vehicles_with_price"),
        json!({"category_id": 1, "city_id": 2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json, "vehicle_details", "vehicle_id"), vec![1]);
    assert_eq!(json["vehicle_details"][0]["starting_price_per_km"], 12.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn all_vehicles_with_price_unpriced_category_is_not_found(pool: PgPool) {
    seed_catalog(&pool).await;
    let app = TestApp::new(pool);

    let response = post_json(
        app.app(),
        &website("/all_vehicles_with_price"),
        json!({"category_id": 2, "city_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Sub-categories and other services
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn sub_categories_and_other_services(pool: PgPool) {
    seed_catalog(&pool).await;
    let app = TestApp::new(pool);

    let response = post_json(app.app(), &website("/all_sub_categories"), json!({"category_id": 4})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        ids(&body_json(response).await, "sub_categories_details", "sub_cat_id"),
        vec![2, 1]
    );

    let response = post_json(app.app(), &website("/all_other_services"), json!({"sub_cat_id": "1"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["other_services_details"].as_array().unwrap().len(), 2);

    let response = post_json(app.app(), &website("/all_other_services"), json!({"sub_cat_id": 2})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn other_services_requires_sub_category(pool: PgPool) {
    let app = TestApp::new(pool);

    let response = post_json(app.app(), &website("/all_other_services"), json!({"category_id": 4})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Missing required fields: sub_cat_id"
    );
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn gallery_endpoints_split_by_type(pool: PgPool) {
    seed_catalog(&pool).await;
    let app = TestApp::new(pool);

    let response = post_empty(app.app(), &website("/all_delivery_gallery_images")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json, "gallery_data_delivery", "gallery_id"), vec![1, 2]);

    let response = post_empty(app.app(), &website("/all_services_gallery_images")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json, "gallery_data_services", "gallery_id"), vec![3]);
    assert_eq!(json["gallery_data_services"][0]["category_type"], "Services");
}

// ---------------------------------------------------------------------------
// Database failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_database_returns_sanitized_500() {
    let app = TestApp::new(common::lazy_pool());

    let response = post_json(
        app.app(),
        &website("/all_vehicles"),
        json!({"category_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Internal Server Error"})
    );
}

#[tokio::test]
async fn validation_runs_before_database() {
    // The pool cannot connect, so a 400 proves no query was attempted.
    let app = TestApp::new(common::lazy_pool());

    let response = post_json(app.app(), &website("/all_sub_categories"), json!({"category_id": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn migrations_path_points_at_db_crate() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(MIGRATIONS);
    assert!(path.is_dir(), "{} should exist", path.display());
}
