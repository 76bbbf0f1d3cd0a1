//! API DTOs (Data Transfer Objects)

use serde::Serialize;

/// Upload response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Relative URL the static layer serves the file under
    pub url: String,
}
