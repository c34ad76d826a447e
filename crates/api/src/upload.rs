//! Image upload staging and relocation.
//!
//! An upload is streamed into the backend-private staging directory under
//! its assigned filename, then moved into the public directory that is
//! served under `/uploads`. A failed move leaves the staged file in place.

use std::io;
use std::path::{Path, PathBuf};

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use tokio::io::AsyncWriteExt;
use vtpartner_core::upload::{assigned_filename, now_millis, public_url, UPLOAD_FIELD};

use crate::config::UploadConfig;

/// Consecutive millisecond values tried before a name clash becomes an error.
const NAME_ATTEMPTS: i64 = 64;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("no '{UPLOAD_FIELD}' file in request")]
    NoFile,

    #[error("file exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("malformed multipart body: {0}")]
    Multipart(MultipartError),

    #[error("unexpected upload: {0}")]
    Unexpected(String),

    #[error("failed to stage upload: {0}")]
    Stage(#[source] io::Error),

    #[error("failed to move {filename} to the public directory: {source}")]
    Move {
        filename: String,
        #[source]
        source: io::Error,
    },
}

impl UploadError {
    /// Body-limit violations surface as [`UploadError::TooLarge`].
    pub fn from_multipart(err: MultipartError, limit: u64) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UploadError::TooLarge { limit }
        } else {
            UploadError::Multipart(err)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::NoFile => StatusCode::BAD_REQUEST,
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::Multipart(_)
            | UploadError::Unexpected(_)
            | UploadError::Stage(_)
            | UploadError::Move { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client; never includes I/O details.
    pub fn public_message(&self) -> &'static str {
        match self {
            UploadError::NoFile => "No file uploaded",
            UploadError::TooLarge { .. } => "File too large",
            UploadError::Multipart(_) | UploadError::Unexpected(_) | UploadError::Stage(_) => {
                "Error uploading file"
            }
            UploadError::Move { .. } => "Error moving uploaded file",
        }
    }
}

// ---------------------------------------------------------------------------
// StagedUpload
// ---------------------------------------------------------------------------

/// A file written to the staging directory and awaiting relocation.
#[derive(Debug, Clone)]
pub struct StagedUpload {
    /// File name as sent by the client.
    pub original_name: String,
    /// Millisecond value in `filename`.
    pub unix_millis: i64,
    /// `{field}-{unix_millis}{ext}`; also the public filename unless that
    /// name is taken by the time the upload is published.
    pub filename: String,
    pub staging_path: PathBuf,
    pub size_bytes: u64,
}

// ---------------------------------------------------------------------------
// UploadRelocator
// ---------------------------------------------------------------------------

/// Receives a single image upload and publishes it.
#[derive(Debug, Clone)]
pub struct UploadRelocator {
    staging_dir: PathBuf,
    public_dir: PathBuf,
    public_base_url: String,
    max_file_bytes: u64,
}

impl UploadRelocator {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            staging_dir: config.staging_dir.clone(),
            public_dir: config.public_dir.clone(),
            public_base_url: config.public_base_url.clone(),
            max_file_bytes: config.max_file_bytes,
        }
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_bytes
    }

    /// Create the staging and public directories if they do not exist.
    pub async fn ensure_dirs(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.staging_dir).await?;
        tokio::fs::create_dir_all(&self.public_dir).await
    }

    /// Whether both upload directories exist and are directories.
    pub async fn is_ready(&self) -> bool {
        is_dir(&self.staging_dir).await && is_dir(&self.public_dir).await
    }

    /// Stream the single `vtPartnerImage` file of a multipart body into the
    /// staging directory.
    ///
    /// Text fields are ignored. A file under any other field name, or a
    /// second image, fails the upload and discards what was staged.
    pub async fn receive(&self, multipart: &mut Multipart) -> Result<StagedUpload, UploadError> {
        let mut staged: Option<StagedUpload> = None;

        let result = self.receive_into(multipart, &mut staged).await;
        match (result, staged) {
            (Ok(()), Some(upload)) => Ok(upload),
            (Ok(()), None) => Err(UploadError::NoFile),
            (Err(err), leftover) => {
                if let Some(upload) = leftover {
                    discard(&upload.staging_path).await;
                }
                Err(err)
            }
        }
    }

    async fn receive_into(
        &self,
        multipart: &mut Multipart,
        staged: &mut Option<StagedUpload>,
    ) -> Result<(), UploadError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| UploadError::from_multipart(e, self.max_file_bytes))?
        {
            let Some(original_name) = field.file_name().map(str::to_string) else {
                continue;
            };

            let name = field.name().unwrap_or("").to_string();
            if name != UPLOAD_FIELD {
                return Err(UploadError::Unexpected(format!(
                    "file sent under field '{name}'"
                )));
            }
            if staged.is_some() {
                return Err(UploadError::Unexpected(format!(
                    "more than one '{UPLOAD_FIELD}' file"
                )));
            }

            *staged = Some(self.stage(field, original_name).await?);
        }
        Ok(())
    }

    async fn stage(
        &self,
        mut field: Field<'_>,
        original_name: String,
    ) -> Result<StagedUpload, UploadError> {
        tokio::fs::create_dir_all(&self.staging_dir)
            .await
            .map_err(UploadError::Stage)?;

        let (reserved, mut file) = self.reserve_staging_file(&original_name).await?;

        let mut size_bytes: u64 = 0;
        let written: Result<(), UploadError> = async {
            while let Some(chunk) = field
                .chunk()
                .await
                .map_err(|e| UploadError::from_multipart(e, self.max_file_bytes))?
            {
                size_bytes += chunk.len() as u64;
                if size_bytes > self.max_file_bytes {
                    return Err(UploadError::TooLarge {
                        limit: self.max_file_bytes,
                    });
                }
                file.write_all(&chunk).await.map_err(UploadError::Stage)?;
            }
            file.flush().await.map_err(UploadError::Stage)
        }
        .await;

        drop(file);
        if let Err(err) = written {
            discard(&reserved.staging_path).await;
            return Err(err);
        }

        tracing::debug!(filename = %reserved.filename, size_bytes, "Upload staged");
        Ok(StagedUpload {
            original_name,
            unix_millis: reserved.unix_millis,
            filename: reserved.filename,
            staging_path: reserved.staging_path,
            size_bytes,
        })
    }

    /// Create an empty staging file under the first free name, starting at
    /// the current millisecond and moving forward while the name is taken in
    /// either directory.
    async fn reserve_staging_file(
        &self,
        original_name: &str,
    ) -> Result<(ReservedName, tokio::fs::File), UploadError> {
        let start = now_millis();

        for unix_millis in start..start + NAME_ATTEMPTS {
            let filename = assigned_filename(UPLOAD_FIELD, original_name, unix_millis);
            let published = tokio::fs::try_exists(self.public_dir.join(&filename))
                .await
                .unwrap_or(false);
            if published {
                continue;
            }

            let staging_path = self.staging_dir.join(&filename);
            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&staging_path)
                .await
            {
                Ok(file) => {
                    let reserved = ReservedName {
                        unix_millis,
                        filename,
                        staging_path,
                    };
                    return Ok((reserved, file));
                }
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(err) => return Err(UploadError::Stage(err)),
            }
        }

        Err(UploadError::Stage(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("no free upload name after {NAME_ATTEMPTS} attempts"),
        )))
    }

    /// Move a staged upload into the public directory and return its URL.
    ///
    /// If another upload has published the same name in the meantime, the
    /// millisecond part is moved forward until a free name is found.
    pub async fn relocate(&self, staged: &StagedUpload) -> Result<String, UploadError> {
        tokio::fs::create_dir_all(&self.public_dir)
            .await
            .map_err(|source| UploadError::Move {
                filename: staged.filename.clone(),
                source,
            })?;

        let mut filename = staged.filename.clone();
        for offset in 1..=NAME_ATTEMPTS {
            let destination = self.public_dir.join(&filename);
            match move_file(&staged.staging_path, &destination).await {
                Ok(()) => return Ok(public_url(&self.public_base_url, &filename)),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    tracing::debug!(%filename, "Public name taken, trying the next one");
                    filename = assigned_filename(
                        UPLOAD_FIELD,
                        &staged.original_name,
                        staged.unix_millis + offset,
                    );
                }
                Err(source) => return Err(UploadError::Move { filename, source }),
            }
        }

        Err(UploadError::Move {
            filename,
            source: io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("no free public name after {NAME_ATTEMPTS} attempts"),
            ),
        })
    }
}

/// Name reserved in the staging directory.
struct ReservedName {
    unix_millis: i64,
    filename: String,
    staging_path: PathBuf,
}

/// Move `from` to `to` without ever replacing an existing `to`.
///
/// Hard-links first; when linking is not possible (e.g. the directories are
/// on different filesystems) the bytes are copied into a newly created file.
/// Either way an existing destination fails with `AlreadyExists`.
async fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match tokio::fs::hard_link(from, to).await {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Err(err),
        Err(link_err) => {
            tracing::debug!(error = %link_err, "Hard link failed, copying instead");
            copy_to_new_file(from, to).await?;
        }
    }

    if let Err(err) = tokio::fs::remove_file(from).await {
        tracing::warn!(path = %from.display(), error = %err, "Published upload left in staging");
    }
    Ok(())
}

async fn copy_to_new_file(from: &Path, to: &Path) -> io::Result<()> {
    let mut source = tokio::fs::File::open(from).await?;
    let mut destination = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(to)
        .await?;

    let copied = async {
        tokio::io::copy(&mut source, &mut destination).await?;
        destination.flush().await
    }
    .await;

    if copied.is_err() {
        drop(destination);
        discard(to).await;
    }
    copied
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .is_ok_and(|metadata| metadata.is_dir())
}

async fn discard(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), error = %err, "Failed to remove staged upload");
    }
}
