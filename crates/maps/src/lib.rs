//! Client for the Google Distance Matrix API.
//!
//! Only the place-id to place-id lookup in metric units is supported. The
//! API key lives in [`MapsConfig`] and is added to every request; callers
//! never supply it.

use std::time::Duration;

/// Public Distance Matrix endpoint.
pub const DEFAULT_DISTANCE_MATRIX_URL: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";

/// Timeout for a single upstream request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Mapping-service credentials.
#[derive(Clone)]
pub struct MapsConfig {
    pub api_key: String,
}

impl std::fmt::Debug for MapsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Errors from the Distance Matrix client.
#[derive(Debug, thiserror::Error)]
pub enum DistanceMatrixError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Distance Matrix API error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

/// HTTP client for the Distance Matrix endpoint.
#[derive(Debug, Clone)]
pub struct DistanceMatrixClient {
    client: reqwest::Client,
    endpoint: String,
    config: MapsConfig,
}

impl DistanceMatrixClient {
    /// Create a client for `endpoint` (usually [`DEFAULT_DISTANCE_MATRIX_URL`]).
    pub fn new(endpoint: String, config: MapsConfig) -> Result<Self, DistanceMatrixError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, endpoint, config))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, endpoint: String, config: MapsConfig) -> Self {
        Self {
            client,
            endpoint,
            config,
        }
    }

    /// Look up the distance between two places and return the raw JSON body.
    ///
    /// The body is returned unparsed so callers can relay it unchanged. A 2xx
    /// response whose JSON carries an API-level error status (e.g.
    /// `REQUEST_DENIED`) is still a success here.
    pub async fn distance_between_places(
        &self,
        origin_place_id: &str,
        destination_place_id: &str,
    ) -> Result<Vec<u8>, DistanceMatrixError> {
        let origins = format!("place_id:{origin_place_id}");
        let destinations = format!("place_id:{destination_place_id}");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("origins", origins.as_str()),
                ("destinations", destinations.as_str()),
                ("units", "metric"),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DistanceMatrixError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(bytes = body.len(), "Distance Matrix response received");
        Ok(body.to_vec())
    }
}
