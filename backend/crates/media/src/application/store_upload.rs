//! Store Upload Use Case
//!
//! Validates an uploaded file and persists it through the image store.
//! Validation runs before any bytes touch the disk.

use std::sync::Arc;

use crate::application::config::{ALLOWED_MIME_TYPES, MediaConfig};
use crate::error::{UploadError, UploadResult};
use crate::infra::disk::DiskImageStore;

/// A successfully stored upload
pub struct UploadedImage {
    /// Relative URL the static layer serves the file under
    pub url: String,
}

/// Store upload use case
pub struct StoreUploadUseCase {
    store: Arc<DiskImageStore>,
    config: Arc<MediaConfig>,
}

impl StoreUploadUseCase {
    pub fn new(store: Arc<DiskImageStore>, config: Arc<MediaConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(
        &self,
        original_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> UploadResult<UploadedImage> {
        validate_content_type(content_type)?;

        if bytes.len() > self.config.max_bytes {
            return Err(UploadError::PayloadTooLarge {
                max_bytes: self.config.max_bytes,
            });
        }

        let stored_name = self.store.save(original_name, bytes).await?;

        tracing::info!(
            file = %stored_name,
            content_type = %content_type,
            "Image uploaded"
        );

        Ok(UploadedImage {
            url: format!("{}/{}", self.config.public_prefix, stored_name),
        })
    }
}

/// Check the declared MIME type against the allow-list
fn validate_content_type(content_type: &str) -> UploadResult<()> {
    if !ALLOWED_MIME_TYPES.contains(&content_type) {
        return Err(UploadError::InvalidFileType(content_type.to_string()));
    }
    Ok(())
}
