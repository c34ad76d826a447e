#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use vtpartner_api::config::{ServerConfig, UploadConfig};
use vtpartner_api::router::build_app_router;
use vtpartner_api::state::AppState;
use vtpartner_core::upload::MAX_UPLOAD_BYTES;
use vtpartner_maps::MapsConfig;

/// Prefix the website routes are mounted under in tests.
pub const PREFIX: &str = "/api/v1/website";

/// Base of `imageUrl` in tests.
pub const PUBLIC_BASE_URL: &str = "https://vtpartner.org";

/// API key the test server injects into Distance Matrix requests.
pub const MAPS_API_KEY: &str = "test-maps-key";

const CATALOG_FIXTURE: &str = include_str!("../../../db/tests/fixtures/catalog.sql");

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(uploads: UploadConfig, distance_matrix_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        api_prefix: PREFIX.to_string(),
        uploads,
        maps: MapsConfig {
            api_key: MAPS_API_KEY.to_string(),
        },
        distance_matrix_url: distance_matrix_url.to_string(),
    }
}

/// Router plus the temporary upload directories it writes to.
///
/// The directories are removed when the value is dropped, so keep it alive
/// for the duration of the test.
pub struct TestApp {
    pub router: Router,
    pub staging: TempDir,
    pub public_root: TempDir,
    pub public_dir: PathBuf,
}

impl TestApp {
    pub fn builder(pool: PgPool) -> TestAppBuilder {
        TestAppBuilder {
            pool,
            distance_matrix_url: "http://127.0.0.1:9/unused".to_string(),
            public_dir: None,
        }
    }

    pub fn new(pool: PgPool) -> Self {
        Self::builder(pool).build()
    }

    /// Fresh handle to the router (`oneshot` consumes it).
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    pub fn staged_files(&self) -> Vec<String> {
        list_dir(self.staging.path())
    }

    pub fn public_files(&self) -> Vec<String> {
        list_dir(&self.public_dir)
    }
}

pub struct TestAppBuilder {
    pool: PgPool,
    distance_matrix_url: String,
    public_dir: Option<PathBuf>,
}

impl TestAppBuilder {
    pub fn distance_matrix_url(mut self, url: impl Into<String>) -> Self {
        self.distance_matrix_url = url.into();
        self
    }

    /// Override the public directory (relative paths resolve inside the
    /// temporary public root).
    pub fn public_dir(mut self, relative: impl Into<PathBuf>) -> Self {
        self.public_dir = Some(relative.into());
        self
    }

    pub fn build(self) -> TestApp {
        let staging = tempfile::tempdir().unwrap();
        let public_root = tempfile::tempdir().unwrap();
        let public_dir = match self.public_dir {
            Some(relative) => public_root.path().join(relative),
            None => public_root.path().to_path_buf(),
        };

        let uploads = UploadConfig {
            staging_dir: staging.path().to_path_buf(),
            public_dir: public_dir.clone(),
            public_base_url: PUBLIC_BASE_URL.to_string(),
            max_file_bytes: MAX_UPLOAD_BYTES,
        };
        let config = test_config(uploads, &self.distance_matrix_url);
        let state = AppState::new(self.pool, config).unwrap();

        TestApp {
            router: build_app_router(state),
            staging,
            public_root,
            public_dir,
        }
    }
}

fn list_dir(path: &std::path::Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(path) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// A pool that never connects; for routes that do not touch the database.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy("postgres://vtpartner@127.0.0.1:1/unreachable")
        .unwrap()
}

/// Load the shared catalog fixture.
pub async fn seed_catalog(pool: &PgPool) {
    sqlx::raw_sql(CATALOG_FIXTURE).execute(pool).await.unwrap();
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub fn website(path: &str) -> String {
    format!("{PREFIX}{path}")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST with no body and no content type.
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Multipart
// ---------------------------------------------------------------------------

pub const BOUNDARY: &str = "vtpartner-test-boundary";

/// One part of a `multipart/form-data` body.
pub enum Part<'a> {
    Text {
        name: &'a str,
        value: &'a str,
    },
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        data: Vec<u8>,
    },
}

pub fn multipart_body(parts: Vec<Part<'_>>) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(&data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, parts: Vec<Part<'_>>) -> Response<Body> {
    post_raw(
        app,
        uri,
        &format!("multipart/form-data; boundary={BOUNDARY}"),
        multipart_body(parts),
    )
    .await
}
