//! Naming rules for uploaded images.

use std::path::Path;

/// Multipart field the image must be sent under.
pub const UPLOAD_FIELD: &str = "vtPartnerImage";

/// Maximum accepted image size (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Path segment the public directory is served under.
pub const UPLOADS_SEGMENT: &str = "uploads";

/// Current time as Unix milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Extension of the client-supplied file name, including the leading dot.
///
/// Empty when the name has no extension. Dot-files such as `.png` have no
/// extension; a trailing dot (`photo.`) yields `"."`.
pub fn original_extension(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Filename assigned to a staged upload: `{field}-{unix_millis}{ext}`.
pub fn assigned_filename(field: &str, original_name: &str, unix_millis: i64) -> String {
    format!("{field}-{unix_millis}{}", original_extension(original_name))
}

/// Public URL of a relocated upload.
pub fn public_url(public_base_url: &str, filename: &str) -> String {
    format!(
        "{}/{UPLOADS_SEGMENT}/{filename}",
        public_base_url.trim_end_matches('/')
    )
}
