use std::path::PathBuf;

use vtpartner_core::upload::MAX_UPLOAD_BYTES;
use vtpartner_maps::{MapsConfig, DEFAULT_DISTANCE_MATRIX_URL};

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Where uploaded images are staged, published, and served from.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Backend-private directory uploads are streamed into.
    pub staging_dir: PathBuf,
    /// Directory served under `/uploads`.
    pub public_dir: PathBuf,
    /// Base of the `imageUrl` returned to clients.
    pub public_base_url: String,
    /// Largest accepted file in bytes.
    pub max_file_bytes: u64,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the maps API key have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Prefix the website routes are nested under. Empty mounts them at the root.
    pub api_prefix: String,
    pub uploads: UploadConfig,
    pub maps: MapsConfig,
    /// Distance Matrix endpoint the `/distance` proxy forwards to.
    pub distance_matrix_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default                                                   |
    /// |------------------------|-----------------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                                 |
    /// | `PORT`                 | `3000`                                                    |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                                   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                                      |
    /// | `API_PREFIX`           | `/api/v1/website`                                         |
    /// | `UPLOAD_STAGING_DIR`   | `uploads/staging`                                         |
    /// | `UPLOAD_PUBLIC_DIR`    | `uploads/public`                                          |
    /// | `PUBLIC_BASE_URL`      | `https://vtpartner.org`                                   |
    /// | `MAPS_API_KEY`         | required                                                  |
    /// | `DISTANCE_MATRIX_URL`  | `https://maps.googleapis.com/maps/api/distancematrix/json`|
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse_var("PORT", var("PORT", "3000"))?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parse_var("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS", "30"))?;

        let api_prefix = normalize_prefix(&var("API_PREFIX", "/api/v1/website"));

        let uploads = UploadConfig {
            staging_dir: PathBuf::from(var("UPLOAD_STAGING_DIR", "uploads/staging")),
            public_dir: PathBuf::from(var("UPLOAD_PUBLIC_DIR", "uploads/public")),
            public_base_url: var("PUBLIC_BASE_URL", "https://vtpartner.org"),
            max_file_bytes: MAX_UPLOAD_BYTES,
        };

        let api_key = lookup("MAPS_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::Missing("MAPS_API_KEY"))?;

        let distance_matrix_url = var("DISTANCE_MATRIX_URL", DEFAULT_DISTANCE_MATRIX_URL);

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            api_prefix,
            uploads,
            maps: MapsConfig { api_key },
            distance_matrix_url,
        })
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}

/// `"api/v1/"` -> `"/api/v1"`, `"/"` -> `""`.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
