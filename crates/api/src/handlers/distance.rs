//! Distance Matrix proxy.

use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use vtpartner_core::validation::RequiredFields;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DistanceParams {
    pub origins: Option<String>,
    pub destinations: Option<String>,
}

/// GET /distance?origins=<place id>&destinations=<place id>
///
/// Relays the upstream JSON body unchanged.
pub async fn distance(
    State(state): State<AppState>,
    Query(params): Query<DistanceParams>,
) -> AppResult<Response> {
    RequiredFields::new()
        .field("origins", &params.origins)
        .field("destinations", &params.destinations)
        .check()?;

    let origins = params.origins.unwrap_or_default();
    let destinations = params.destinations.unwrap_or_default();

    let body = state
        .distance_client
        .distance_between_places(&origins, &destinations)
        .await?;

    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}
