//! Handler for website image uploads.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;
use crate::upload::UploadError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub image_url: String,
}

/// POST /upload
///
/// Accepts one image under the multipart field `vtPartnerImage` and returns
/// its public URL. A request that is not multipart carries no file.
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Upload without multipart body");
        UploadError::NoFile
    })?;

    let staged = state.uploads.receive(&mut multipart).await?;
    let image_url = state.uploads.relocate(&staged).await?;

    tracing::info!(
        %image_url,
        original_name = %staged.original_name,
        size_bytes = staged.size_bytes,
        "Image uploaded",
    );

    Ok(Json(UploadResponse { image_url }))
}
