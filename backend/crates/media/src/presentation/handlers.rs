//! HTTP Handlers

use axum::Json;
use axum::extract::{Multipart, State};
use std::sync::Arc;

use crate::application::config::{MediaConfig, UPLOAD_FIELD_NAME};
use crate::application::store_upload::StoreUploadUseCase;
use crate::error::{UploadError, UploadResult};
use crate::infra::disk::DiskImageStore;
use crate::presentation::dto::UploadResponse;

/// Shared state for media handlers
#[derive(Clone)]
pub struct MediaAppState {
    pub store: Arc<DiskImageStore>,
    pub config: Arc<MediaConfig>,
}

/// POST /api/upload
pub async fn upload(
    State(state): State<MediaAppState>,
    mut multipart: Multipart,
) -> UploadResult<Json<UploadResponse>> {
    // Take the first part under the expected field; anything else in the
    // request is ignored
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        let original_name = field
            .file_name()
            .map(|name| name.to_string())
            .unwrap_or_else(|| "upload".to_string());

        let content_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .ok_or(UploadError::NoFileProvided)?;

        let bytes = field.bytes().await?;

        let use_case = StoreUploadUseCase::new(state.store.clone(), state.config.clone());
        let uploaded = use_case
            .execute(&original_name, &content_type, &bytes)
            .await?;

        return Ok(Json(UploadResponse { url: uploaded.url }));
    }

    Err(UploadError::NoFileProvided)
}
