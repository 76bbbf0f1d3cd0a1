//! Application Configuration
//!
//! Configuration for the Media application layer.

use std::path::PathBuf;

/// Multipart field the client must use for the file
pub const UPLOAD_FIELD_NAME: &str = "image";

/// Maximum accepted file size (5 MiB)
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// MIME types accepted for upload
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];

/// Media application configuration
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory files are written to
    pub upload_dir: PathBuf,
    /// URL prefix the static layer serves the directory under
    pub public_prefix: String,
    /// Maximum accepted file size in bytes
    pub max_bytes: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            public_prefix: "/uploads".to_string(),
            max_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl MediaConfig {
    /// Config rooted at the given upload directory
    pub fn with_upload_dir(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            ..Default::default()
        }
    }
}
